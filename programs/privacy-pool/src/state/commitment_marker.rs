//! Commitment marker: a sentinel account recording that an output
//! commitment has been inserted into the accumulator, carrying its
//! encrypted output payload and assigned leaf index for the indexer.
//!
//! PDA seed: `"commitment{k}" || commitment_bytes_le`, `k` the output slot.

use anchor_lang::prelude::*;

pub const COMMITMENT_SEED_0: &[u8] = b"commitment0";
pub const COMMITMENT_SEED_1: &[u8] = b"commitment1";

pub fn seed_prefix(slot: u8) -> &'static [u8] {
    match slot {
        0 => COMMITMENT_SEED_0,
        _ => COMMITMENT_SEED_1,
    }
}

/// Maximum encrypted output length accepted, bounding account size and
/// transaction cost; the payload's contents are opaque to the program.
pub const MAX_ENCRYPTED_OUTPUT_LEN: usize = 256;

#[account]
pub struct CommitmentMarker {
    pub commitment: [u8; 32],
    pub encrypted_output: Vec<u8>,
    pub index: u64,
    pub bump: u8,
}

impl CommitmentMarker {
    pub fn space(max_encrypted_output_len: usize) -> usize {
        8 // discriminator
            + 32 // commitment
            + 4 + max_encrypted_output_len // encrypted_output (len-prefixed)
            + 8 // index
            + 1 // bump
    }

    pub fn initialize(
        &mut self,
        commitment: [u8; 32],
        encrypted_output: Vec<u8>,
        index: u64,
        bump: u8,
    ) {
        self.commitment = commitment;
        self.encrypted_output = encrypted_output;
        self.index = index;
        self.bump = bump;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_accounts_for_encrypted_output_bound() {
        let space = CommitmentMarker::space(MAX_ENCRYPTED_OUTPUT_LEN);
        assert!(space > MAX_ENCRYPTED_OUTPUT_LEN);
    }
}
