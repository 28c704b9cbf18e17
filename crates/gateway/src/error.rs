//! # Gateway Errors
//!
//! Transport-level failures raised by the gateway. Business rejections
//! are not errors at this layer - they travel as `ApiResult::Rejected`
//! and the orchestrator decides how to surface them.

use thiserror::Error;

/// Gateway failures: the request could not complete or the response
/// could not be understood. No retries are attempted - a failed call
/// surfaces immediately to the caller.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from ledger: {0}")]
    Decode(String),

    #[error("Ledger returned HTTP {status} with no readable body")]
    Http { status: u16 },
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
