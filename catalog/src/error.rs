//! Error types for the bounty catalog.

/// Errors raised while building a catalog or parsing catalog labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two records share the same id
    #[error("Duplicate bounty id: {0}")]
    DuplicateId(String),

    /// Difficulty label not recognised
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Status label not recognised
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
