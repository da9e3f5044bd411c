//! Explore session for the bounty catalog.
//!
//! Ties a [`catalog::BountyStore`] to one user's filter and an incremental
//! reveal window:
//!
//! - **Filter changes** recompute the match count and restart from the first page
//! - **Sentinel triggers** reveal one more step after a pluggable delay
//! - **Stale reveals** started before a filter change are discarded
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                 ExploreSession                 │
//! │                                                │
//! │  FilterState ──▶ QueryEngine ──▶ total         │
//! │                                    │           │
//! │  sentinel ──▶ RevealDelay ──▶ RevealController │
//! └────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod delay;
pub mod reveal;
pub mod session;
pub mod types;

// Re-export main types
pub use config::ExploreConfig;
pub use delay::{FixedDelay, NoDelay, RevealDelay};
pub use reveal::RevealController;
pub use session::ExploreSession;
pub use types::*;
