//! Application-wide error types using thiserror
//!
//! All errors in the bridge are wrapped in BridgeError to provide
//! consistent error handling across the codebase.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Dedup store error: {0}")]
    Dedup(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
