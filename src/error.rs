//! Error types for the selection store.
//!
//! Selection operations themselves are total. Errors only come from the
//! configuration and notification layers around them.

use thiserror::Error;

/// Main error type for selection operations.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SelectionError {
    fn from(e: serde_json::Error) -> Self {
        SelectionError::Serialization(e.to_string())
    }
}

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
