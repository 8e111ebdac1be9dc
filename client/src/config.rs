//! Configuration for the client runtime.

use std::env;

/// Default remote listing endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: String,
}

impl Config {
    /// Create a configuration for a specific endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        reqwest::Url::parse(&endpoint)
            .map_err(|_| ConfigError::InvalidEndpoint(endpoint.clone()))?;
        Ok(Self { endpoint })
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint =
            env::var("ROLODEX_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// The remote listing endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ROLODEX_ENDPOINT value: {0}")]
    InvalidEndpoint(String),
}
