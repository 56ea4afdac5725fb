//! `/deposit` forwards a client-signed transaction verbatim; `/withdraw`
//! assembles and co-signs one from a proven proof and envelope. Neither
//! path ever touches user secrets, and neither can rebind anything
//! `extDataHash` covers: the relay only serializes fields the client
//! already proved against.

use std::str::FromStr;

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use base64::Engine;
use serde::{Deserialize, Serialize};
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;
use solana_sdk::transaction::Transaction;

use crate::error::RelayError;
use crate::ledger::{build_transact_instruction, submit_with_retry};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    signature: String,
    success: bool,
}

#[derive(Deserialize)]
pub struct DepositRequest {
    signed_transaction: String,
}

pub async fn post_deposit(
    State(state): State<AppState>,
    Json(request): Json<DepositRequest>,
) -> Result<impl IntoResponse, RelayError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&request.signed_transaction)
        .map_err(|e| RelayError::BadRequest(e.to_string()))?;
    let transaction: Transaction =
        bincode::deserialize(&bytes).map_err(|e| RelayError::BadRequest(e.to_string()))?;

    let signature = submit_with_retry(&state.rpc_client, &transaction, state.config.max_retries)?;

    Ok(Json(SubmitResponse {
        signature: signature.to_string(),
        success: true,
    }))
}

#[derive(Deserialize)]
pub struct WithdrawRequest {
    serialized_proof: SerializedProof,
    global_config: String,
    tree: String,
    verification_key: String,
    nullifier_marker_0: String,
    nullifier_marker_1: String,
    commitment_marker_0: String,
    commitment_marker_1: String,
    tree_vault: String,
    fee_vault: String,
    recipient: String,
    fee_recipient: String,
    mint: String,
    ext_mint: String,
    ext_amount: i64,
    fee: u64,
    encrypted_output1: String,
    encrypted_output2: String,
}

#[derive(Deserialize)]
pub struct SerializedProof {
    a: String,
    b: String,
    c: String,
    root: String,
    public_amount: String,
    ext_data_hash: String,
    input_nullifier0: String,
    input_nullifier1: String,
    output_commitment0: String,
    output_commitment1: String,
}

pub async fn post_withdraw(
    State(state): State<AppState>,
    Json(request): Json<WithdrawRequest>,
) -> Result<impl IntoResponse, RelayError> {
    let proof_a = hex_field32(&request.serialized_proof.a)?;
    let proof_c = hex_field32(&request.serialized_proof.c)?;
    let proof_b = hex_field64(&request.serialized_proof.b)?;

    let public_inputs = [
        hex_field32(&request.serialized_proof.root)?,
        hex_field32(&request.serialized_proof.public_amount)?,
        hex_field32(&request.serialized_proof.ext_data_hash)?,
        hex_field32(&request.serialized_proof.input_nullifier0)?,
        hex_field32(&request.serialized_proof.input_nullifier1)?,
        hex_field32(&request.serialized_proof.output_commitment0)?,
        hex_field32(&request.serialized_proof.output_commitment1)?,
        hex_field32(&request.mint)?,
    ];

    let recipient_pubkey = parse_pubkey(&request.recipient)?;
    let fee_recipient_bytes = hex_field32(&request.fee_recipient)?;
    let ext_mint = hex_field32(&request.ext_mint)?;

    let encrypted_output0 =
        hex::decode(&request.encrypted_output1).map_err(|e| RelayError::BadRequest(e.to_string()))?;
    let encrypted_output1 =
        hex::decode(&request.encrypted_output2).map_err(|e| RelayError::BadRequest(e.to_string()))?;

    let program_id = Pubkey::from_str(&state.config.program_id)
        .map_err(|e| RelayError::BadRequest(e.to_string()))?;

    let accounts = vec![
        AccountMeta::new_readonly(parse_pubkey(&request.global_config)?, false),
        AccountMeta::new(parse_pubkey(&request.tree)?, false),
        AccountMeta::new_readonly(parse_pubkey(&request.verification_key)?, false),
        AccountMeta::new(parse_pubkey(&request.nullifier_marker_0)?, false),
        AccountMeta::new(parse_pubkey(&request.nullifier_marker_1)?, false),
        AccountMeta::new(parse_pubkey(&request.commitment_marker_0)?, false),
        AccountMeta::new(parse_pubkey(&request.commitment_marker_1)?, false),
        AccountMeta::new(parse_pubkey(&request.tree_vault)?, false),
        AccountMeta::new(parse_pubkey(&request.fee_vault)?, false),
        AccountMeta::new(recipient_pubkey, false),
        AccountMeta::new(state.fee_payer.pubkey(), true),
        AccountMeta::new_readonly(solana_sdk::system_program::ID, false),
    ];

    let instruction = build_transact_instruction(
        &program_id,
        accounts,
        proof_a,
        proof_b,
        proof_c,
        public_inputs,
        request.ext_amount,
        request.fee,
        fee_recipient_bytes,
        ext_mint,
        recipient_pubkey.to_bytes(),
        encrypted_output0,
        encrypted_output1,
    );

    let blockhash = state
        .rpc_client
        .get_latest_blockhash()
        .map_err(|e| RelayError::Internal(anyhow::anyhow!(e)))?;

    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&state.fee_payer.pubkey()),
        &[state.fee_payer.as_ref()],
        blockhash,
    );

    let signature = submit_with_retry(&state.rpc_client, &transaction, state.config.max_retries)?;

    Ok(Json(SubmitResponse {
        signature: signature.to_string(),
        success: true,
    }))
}

fn parse_pubkey(value: &str) -> Result<Pubkey, RelayError> {
    Pubkey::from_str(value).map_err(|e| RelayError::BadRequest(e.to_string()))
}

fn hex_field32(value: &str) -> Result<[u8; 32], RelayError> {
    let bytes = hex::decode(value).map_err(|e| RelayError::BadRequest(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| RelayError::BadRequest("expected 32-byte hex value".to_string()))
}

fn hex_field64(value: &str) -> Result<[u8; 64], RelayError> {
    let bytes = hex::decode(value).map_err(|e| RelayError::BadRequest(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| RelayError::BadRequest("expected 64-byte hex value".to_string()))
}
