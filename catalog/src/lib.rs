//! Bounty catalog: records, filtering and queries.
//!
//! This crate holds everything needed to answer "which bounties should the
//! explore page show for this filter?":
//!
//! - [`BountyStore`]: immutable, ordered store built once per session
//! - [`matches`]: pure predicate over one record and a [`FilterState`]
//! - [`query`] / [`QueryEngine`]: ordered linear scan producing a [`QueryResult`]
//! - [`sample_store`]: the 24-record sample catalog
//! - [`Leaderboard`]: contributors ranked by points
//!
//! # Example
//!
//! ```
//! use catalog::{query, sample_store, FilterState};
//!
//! let store = sample_store();
//! let filter = FilterState::new().with_reward_range(0, 300);
//! let result = query(&store, &filter);
//! assert_eq!(result.total_matched(), 12);
//! ```

pub mod error;
pub mod filter;
pub mod leaderboard;
pub mod query;
pub mod sample;
pub mod store;
pub mod types;

// Re-export main types
pub use error::{CatalogError, Result};
pub use filter::{matches, matches_with};
pub use leaderboard::{sample_leaderboard, Contributor, Leaderboard};
pub use query::{query, query_with, CatalogQuery, QueryEngine, QueryResult};
pub use sample::{sample_bounties, sample_store, sample_store_of, SAMPLE_SIZE};
pub use store::BountyStore;
pub use types::*;
