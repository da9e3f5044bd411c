//! Core types for the explore session.

use serde::{Deserialize, Serialize};

use catalog::CatalogError;

/// Phase of the reveal controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Waiting for a trigger
    Idle,
    /// A trigger fired and the next page is on its way
    Loading,
    /// Every match is visible; only a reset leaves this state
    Exhausted,
}

/// What the presentation layer needs to render the results footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSnapshot {
    /// How many matches are shown
    pub visible_count: usize,
    /// How many records matched the filter
    pub total_matched: usize,
    /// Controller phase (drives the loading spinner)
    pub state: RevealState,
    /// Show the end-of-results message
    pub is_exhausted: bool,
    /// Show the empty-state message
    pub is_empty: bool,
}

/// Result of a reveal trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The window grew to `visible_count`
    Advanced { visible_count: usize },
    /// Another reveal is already in flight
    Busy,
    /// Nothing left to reveal
    Exhausted,
    /// The filter changed while loading; the advance was dropped
    Discarded,
}

/// Error types for the explore session.
#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    /// Catalog construction or parsing failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Bounty id not present in the store
    #[error("Bounty not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, ExploreError>;
