//! HTTP surface over the commitment-tree replica.
//!
//! `/deposit` and `/withdraw` live in the `relay` crate instead: they cross
//! a distinct trust boundary (the relay's fee-payer hot wallet) and are not
//! served by this process.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};

use pool_crypto::field::FieldElement;

use crate::error::IndexerError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    root: String,
    next_index: u64,
}

pub async fn get_root(State(state): State<AppState>) -> impl IntoResponse {
    let replica = state.replica.read().await;
    Json(RootResponse {
        root: hex::encode(replica.root().to_le_bytes()),
        next_index: replica.next_index(),
    })
}

#[derive(Serialize)]
pub struct ProofResponse {
    path_elements: Vec<String>,
    path_indices: Vec<bool>,
}

pub async fn get_proof_by_commitment(
    State(state): State<AppState>,
    Path(commitment_hex): Path<String>,
) -> Result<impl IntoResponse, IndexerError> {
    let commitment = parse_field_hex(&commitment_hex)?;
    let replica = state.replica.read().await;
    let proof = replica
        .proof_by_commitment(&commitment)
        .ok_or(IndexerError::CommitmentNotFound)?;

    Ok(Json(ProofResponse {
        path_elements: proof.path_elements.iter().map(|e| hex::encode(e.to_le_bytes())).collect(),
        path_indices: proof.path_indices,
    }))
}

/// Returns the all-zero path for unknown `i`, on purpose. This is the one
/// endpoint a dummy-tolerant client may call with an index it cannot prove
/// is real; `proof_by_commitment` above 404s instead, because a commitment
/// lookup always names a specific leaf the caller claims exists.
pub async fn get_proof_by_index(
    State(state): State<AppState>,
    Path(index): Path<u64>,
) -> impl IntoResponse {
    let replica = state.replica.read().await;
    let proof = replica.proof_by_index(index);
    Json(ProofResponse {
        path_elements: proof.path_elements.iter().map(|e| hex::encode(e.to_le_bytes())).collect(),
        path_indices: proof.path_indices,
    })
}

#[derive(Serialize)]
pub struct UtxosResponse {
    count: u64,
    encrypted_outputs: Vec<String>,
}

pub async fn get_utxos(State(state): State<AppState>) -> impl IntoResponse {
    let replica = state.replica.read().await;
    let outputs = replica.all_encrypted_outputs();
    Json(UtxosResponse {
        count: outputs.len() as u64,
        encrypted_outputs: outputs.iter().map(hex::encode).collect(),
    })
}

#[derive(Deserialize)]
pub struct RangeQuery {
    start: u64,
    end: u64,
}

#[derive(Serialize)]
pub struct UtxosRangeResponse {
    encrypted_outputs: Vec<String>,
    has_more: bool,
    total: u64,
    start: u64,
    end: u64,
}

pub async fn get_utxos_range(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> Result<impl IntoResponse, IndexerError> {
    let replica = state.replica.read().await;
    let (items, has_more, total) = replica.encrypted_outputs_range(range.start, range.end)?;
    Ok(Json(UtxosRangeResponse {
        encrypted_outputs: items.iter().map(hex::encode).collect(),
        has_more,
        total,
        start: range.start,
        end: range.end,
    }))
}

#[derive(Serialize)]
pub struct ExistsResponse {
    exists: bool,
}

pub async fn get_utxo_check(
    State(state): State<AppState>,
    Path(blob_hex): Path<String>,
) -> Result<impl IntoResponse, IndexerError> {
    let blob = hex::decode(&blob_hex).map_err(|e| IndexerError::BadRequest(e.to_string()))?;
    let replica = state.replica.read().await;
    Ok(Json(ExistsResponse {
        exists: replica.has_encrypted_output(&blob),
    }))
}

#[derive(Deserialize)]
pub struct WebhookPayload {
    commitments: Vec<WebhookCommitment>,
}

#[derive(Deserialize)]
pub struct WebhookCommitment {
    commitment: String,
    index: u64,
    encrypted_output: String,
}

pub async fn post_webhook(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
    Json(payload): Json<WebhookPayload>,
) -> Result<impl IntoResponse, IndexerError> {
    if let Some(secret) = &state.config.webhook_shared_secret {
        let provided = headers
            .get("x-webhook-secret")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if provided != secret {
            return Err(IndexerError::Unauthorized);
        }
    }

    let mut replica = state.replica.write().await;
    for entry in payload.commitments {
        let commitment = parse_field_hex(&entry.commitment)?;
        let encrypted_output =
            hex::decode(&entry.encrypted_output).map_err(|e| IndexerError::BadRequest(e.to_string()))?;
        replica.ingest(commitment, entry.index, encrypted_output)?;
    }

    Ok(Json(serde_json::json!({ "ingested": true })))
}

fn parse_field_hex(value: &str) -> Result<FieldElement, IndexerError> {
    let bytes = hex::decode(value).map_err(|e| IndexerError::BadRequest(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(IndexerError::BadRequest("expected 32-byte hex value".to_string()));
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    FieldElement::reduce_le(&arr).map_err(|_| IndexerError::BadRequest("value exceeds field size".to_string()))
}
