use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the stores, persistence, and configuration layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("User is not logged in")]
    NotLoggedIn,
    #[error("Not authorized to {0}")]
    Unauthorized(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Receipt error: {0}")]
    Receipt(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
