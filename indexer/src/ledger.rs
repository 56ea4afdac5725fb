//! Reconciles the in-memory replica against on-ledger commitment markers.
//!
//! Both the webhook push path ([`crate::routes::post_webhook`]) and this
//! periodic poll funnel through [`Replica::ingest`], so out-of-order or
//! duplicate deliveries are handled identically regardless of source
//! (spec.md §9: refresh is idempotent reconciliation keyed by `next_index`,
//! not a rebuild).

use std::str::FromStr;

use sha2::{Digest, Sha256};
use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use pool_crypto::field::FieldElement;

use crate::state::AppState;

/// Anchor account discriminators are the first 8 bytes of
/// `sha256("account:<StructName>")`.
fn account_discriminator(struct_name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(format!("account:{struct_name}").as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

/// Account discriminator + commitment + u32-length-prefixed encrypted
/// output + u64 index + bump, per spec.md §6's commitment marker layout.
/// `get_program_accounts` returns every account type the program owns
/// (global config, tree, verification key, nullifier markers too), so the
/// leading discriminator must be checked, not just the length.
fn parse_commitment_marker(data: &[u8]) -> Option<(FieldElement, u64, Vec<u8>)> {
    const DISCRIMINATOR_LEN: usize = 8;
    if data.len() < DISCRIMINATOR_LEN + 32 + 4 {
        return None;
    }
    if data[..DISCRIMINATOR_LEN] != account_discriminator("CommitmentMarker") {
        return None;
    }

    let mut cursor = DISCRIMINATOR_LEN;
    let mut commitment_bytes = [0u8; 32];
    commitment_bytes.copy_from_slice(&data[cursor..cursor + 32]);
    cursor += 32;

    let len_bytes: [u8; 4] = data.get(cursor..cursor + 4)?.try_into().ok()?;
    let encrypted_len = u32::from_le_bytes(len_bytes) as usize;
    cursor += 4;

    let encrypted_output = data.get(cursor..cursor + encrypted_len)?.to_vec();
    cursor += encrypted_len;

    let index_bytes: [u8; 8] = data.get(cursor..cursor + 8)?.try_into().ok()?;
    let index = u64::from_le_bytes(index_bytes);

    let commitment = FieldElement::reduce_le(&commitment_bytes).ok()?;
    Some((commitment, index, encrypted_output))
}

/// One reconciliation pass: fetch every commitment-marker account owned by
/// the program, sort by index, ingest in order.
pub async fn reconcile_once(state: &AppState, rpc_client: &RpcClient, program_id: &Pubkey) -> anyhow::Result<usize> {
    let accounts = rpc_client.get_program_accounts(program_id)?;

    let mut markers: Vec<(FieldElement, u64, Vec<u8>)> = accounts
        .into_iter()
        .filter_map(|(_, account)| parse_commitment_marker(&account.data))
        .collect();
    markers.sort_by_key(|(_, index, _)| *index);

    let mut ingested = 0usize;
    let mut replica = state.replica.write().await;
    for (commitment, index, encrypted_output) in markers {
        if index < replica.next_index() {
            continue;
        }
        if let Err(e) = replica.ingest(commitment, index, encrypted_output) {
            tracing::warn!(index, error = %e, "reconciliation could not ingest marker");
            continue;
        }
        ingested += 1;
    }

    Ok(ingested)
}

pub async fn run_poll_loop(state: AppState) {
    let rpc_url = state.config.rpc_url.clone();
    let program_id = match Pubkey::from_str(&state.config.program_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "invalid program id, poll loop disabled");
            return;
        }
    };
    let rpc_client = RpcClient::new(rpc_url);
    let mut interval = tokio::time::interval(state.config.poll_interval);

    loop {
        interval.tick().await;
        match reconcile_once(&state, &rpc_client, &program_id).await {
            Ok(0) => {}
            Ok(n) => tracing::info!(ingested = n, "reconciliation ingested new markers"),
            Err(e) => tracing::warn!(error = %e, "reconciliation pass failed, will retry"),
        }
    }
}
