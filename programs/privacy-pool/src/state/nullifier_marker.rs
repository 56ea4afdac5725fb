//! Nullifier marker: a sentinel account whose mere existence records that
//! an input note has been spent. One marker per input slot (0 or 1) so the
//! verifier can enforce exactly two input slots per transaction.
//!
//! PDA seed: `"nullifier{k}" || nullifier_bytes_le`, `k` the slot.
//!
//! Double-spend prevention falls out of account creation semantics alone:
//! the ledger's atomic, all-or-nothing account creation means a second
//! attempt to create the same marker fails outright, with no separate
//! read-then-write race window a concurrent spend could slip through.

use anchor_lang::prelude::*;

pub const NULLIFIER_SEED_0: &[u8] = b"nullifier0";
pub const NULLIFIER_SEED_1: &[u8] = b"nullifier1";

pub fn seed_prefix(slot: u8) -> &'static [u8] {
    match slot {
        0 => NULLIFIER_SEED_0,
        _ => NULLIFIER_SEED_1,
    }
}

#[account]
pub struct NullifierMarker {
    pub nullifier: [u8; 32],
    pub spent_at: i64,
    pub spent_slot: u64,
    pub bump: u8,
}

impl NullifierMarker {
    pub const LEN: usize = 8 // discriminator
        + 32 // nullifier
        + 8  // spent_at
        + 8  // spent_slot
        + 1; // bump

    pub fn initialize(&mut self, nullifier: [u8; 32], spent_at: i64, spent_slot: u64, bump: u8) {
        self.nullifier = nullifier;
        self.spent_at = spent_at;
        self.spent_slot = spent_slot;
        self.bump = bump;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_seeds_are_distinct() {
        assert_ne!(seed_prefix(0), seed_prefix(1));
    }
}
