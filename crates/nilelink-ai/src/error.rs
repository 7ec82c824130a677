//! Facade error taxonomy
//!
//! These never escape `analyze_transaction`; they are converted into the
//! fallback envelope at the boundary.

use nilelink_persist::StoreError;

/// Errors surfaced inside the facade
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Malformed analyze request payload
    #[error("invalid request payload: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// Decision memory failure
    #[error("decision memory failure: {0}")]
    Store(#[from] StoreError),
}
