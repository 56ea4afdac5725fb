//! Relay-facing error type. `ExtDataHashMismatch`/`InvalidProof` are
//! terminal and reported straight to the caller; everything else in the
//! submit path is retried up to a bounded budget before surfacing.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed request body: {0}")]
    BadRequest(String),
    #[error("proof rejected by the program: invalid proof")]
    InvalidProof,
    #[error("proof rejected by the program: ext data hash mismatch")]
    ExtDataHashMismatch,
    #[error("submission failed after exhausting retry budget: {0}")]
    RetriesExhausted(String),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::BadRequest(_) | RelayError::InvalidProof | RelayError::ExtDataHashMismatch => {
                StatusCode::BAD_REQUEST
            }
            RelayError::RetriesExhausted(_) | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Classifies a ledger RPC error as worth retrying. Matches spec.md §5's
/// backpressure rule: retry on rate limiting or blockhash expiry, nothing
/// else.
pub fn is_transient(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("rate limit") || lower.contains("blockhash not found") || lower.contains("blockhash expired")
}
