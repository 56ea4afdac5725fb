//! Indexer-facing error type. Converts to a 4xx/5xx HTTP response at the
//! axum boundary per spec: client mistakes are 4xx, server/ingest faults
//! are 5xx.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("commitment not found")]
    CommitmentNotFound,
    #[error("range start must not exceed end")]
    InvalidRange,
    #[error("webhook authorization failed")]
    Unauthorized,
    #[error("malformed request body: {0}")]
    BadRequest(String),
    #[error("replica ingest rejected out-of-order index {index}, expected {expected}")]
    FutureIndex { index: u64, expected: u64 },
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for IndexerError {
    fn into_response(self) -> Response {
        let status = match self {
            IndexerError::CommitmentNotFound => StatusCode::NOT_FOUND,
            IndexerError::InvalidRange
            | IndexerError::BadRequest(_)
            | IndexerError::FutureIndex { .. } => StatusCode::BAD_REQUEST,
            IndexerError::Unauthorized => StatusCode::UNAUTHORIZED,
            IndexerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
