//! Transaction submission with bounded exponential backoff, and the
//! `transact` instruction-data assembly the withdrawal path needs.

use std::time::Duration;

use sha2::{Digest, Sha256};
use solana_client::rpc_client::RpcClient;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::error::{is_transient, RelayError};

/// Anchor instruction discriminators are the first 8 bytes of
/// `sha256("global:<snake_case_name>")`.
pub fn anchor_discriminator(instruction_name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(format!("global:{instruction_name}").as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

/// Anchor custom program error codes, hex-encoded as they appear in an RPC
/// simulation/confirmation error message (`custom program error: 0x..`).
/// Must track `PrivacyError::{InvalidProof, ExtDataHashMismatch}`'s
/// discriminant order in the program crate.
const INVALID_PROOF_CODE: &str = "0x1771";
const EXT_DATA_HASH_MISMATCH_CODE: &str = "0x1775";

/// Classifies a terminal submission error: the program's own proof/envelope
/// rejections get their own variant so callers can tell "the proof was
/// wrong" apart from "the ledger wouldn't take the transaction."
fn classify_terminal_error(message: String) -> RelayError {
    if message.contains(INVALID_PROOF_CODE) {
        RelayError::InvalidProof
    } else if message.contains(EXT_DATA_HASH_MISMATCH_CODE) {
        RelayError::ExtDataHashMismatch
    } else {
        RelayError::RetriesExhausted(message)
    }
}

/// Submits `transaction`, retrying transient failures (rate limiting,
/// blockhash expiry) with exponential backoff up to `max_retries` times.
/// Any other error, or exhausting the budget, is terminal.
pub fn submit_with_retry(
    rpc_client: &RpcClient,
    transaction: &Transaction,
    max_retries: u32,
) -> Result<Signature, RelayError> {
    let mut attempt = 0;
    loop {
        match rpc_client.send_and_confirm_transaction(transaction) {
            Ok(signature) => return Ok(signature),
            Err(e) => {
                let message = e.to_string();
                if attempt >= max_retries || !is_transient(&message) {
                    return Err(classify_terminal_error(message));
                }
                let backoff = Duration::from_millis(200 * 2u64.pow(attempt));
                tracing::warn!(attempt, backoff_ms = backoff.as_millis() as u64, error = %message, "retrying transient submission failure");
                std::thread::sleep(backoff);
                attempt += 1;
            }
        }
    }
}

/// Builds the `transact` instruction from already-validated withdrawal
/// request fields. The relay never recomputes or rebinds anything
/// `extDataHash` covers; it only serializes what the client already proved
/// against.
#[allow(clippy::too_many_arguments)]
pub fn build_transact_instruction(
    program_id: &Pubkey,
    accounts: Vec<AccountMeta>,
    proof_a: [u8; 32],
    proof_b: [u8; 64],
    proof_c: [u8; 32],
    public_inputs: [[u8; 32]; 8],
    ext_amount: i64,
    fee: u64,
    fee_recipient: [u8; 32],
    ext_mint: [u8; 32],
    recipient_bytes: [u8; 32],
    encrypted_output0: Vec<u8>,
    encrypted_output1: Vec<u8>,
) -> Instruction {
    let mut data = anchor_discriminator("transact").to_vec();
    data.extend_from_slice(&proof_a);
    data.extend_from_slice(&proof_b);
    data.extend_from_slice(&proof_c);
    for input in &public_inputs {
        data.extend_from_slice(input);
    }
    data.extend_from_slice(&recipient_bytes);
    data.extend_from_slice(&ext_amount.to_le_bytes());
    data.extend_from_slice(&fee.to_le_bytes());
    data.extend_from_slice(&fee_recipient);
    data.extend_from_slice(&ext_mint);
    data.extend_from_slice(&(encrypted_output0.len() as u32).to_le_bytes());
    data.extend_from_slice(&encrypted_output0);
    data.extend_from_slice(&(encrypted_output1.len() as u32).to_le_bytes());
    data.extend_from_slice(&encrypted_output1);

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification_matches_spec_backpressure_rule() {
        assert!(is_transient("Rate limited, try again"));
        assert!(is_transient("BlockhashNotFound"));
        assert!(!is_transient("custom program error: 0x1770"));
    }

    #[test]
    fn discriminator_is_stable_across_calls() {
        assert_eq!(anchor_discriminator("transact"), anchor_discriminator("transact"));
        assert_ne!(anchor_discriminator("transact"), anchor_discriminator("pause_pool"));
    }

    #[test]
    fn terminal_error_classification_recognizes_program_rejections() {
        assert!(matches!(
            classify_terminal_error("custom program error: 0x1771".to_string()),
            RelayError::InvalidProof
        ));
        assert!(matches!(
            classify_terminal_error("custom program error: 0x1775".to_string()),
            RelayError::ExtDataHashMismatch
        ));
        assert!(matches!(
            classify_terminal_error("custom program error: 0x1772".to_string()),
            RelayError::RetriesExhausted(_)
        ));
    }
}
