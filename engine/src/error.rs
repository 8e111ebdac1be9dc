//! Error types for the Rolodex engine.

use thiserror::Error;

/// All possible errors from the Rolodex engine.
///
/// Store reads and writes are total and never raise; errors cover input
/// validation, snapshot lifecycle misuse, and sort-key parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Validation errors
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    // Lifecycle errors
    #[error("remote snapshot already settled")]
    SnapshotAlreadySettled,

    // Query errors
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
