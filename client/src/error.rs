//! Unified error handling for the client runtime.

use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
