//! # Store Errors
//!
//! Error types for the session store, wrapping IO and serialization
//! failures.

use thiserror::Error;

/// Session store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
