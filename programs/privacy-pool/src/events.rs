//! Program events, emitted for the indexer's ingest loop to consume.
//!
//! Ordering matters: the indexer treats these as the authoritative record
//! of accepted state transitions and ingests them in ledger order.

use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub authority: Pubkey,
    pub mint: [u8; 32],
    pub tree_height: u8,
    pub root_ring_size: u16,
    pub deposit_cap: u64,
    pub timestamp: i64,
}

#[event]
pub struct VerificationKeySet {
    pub authority: Pubkey,
    pub ic_length: u8,
    pub timestamp: i64,
}

/// Emitted once per accepted `Transact`, carrying everything the indexer
/// needs to mirror the tree and the encrypted-output registry without
/// re-parsing instruction data.
#[event]
pub struct Transacted {
    pub input_nullifier: [[u8; 32]; 2],
    pub output_commitment: [[u8; 32]; 2],
    pub output_index: [u64; 2],
    pub root: [u8; 32],
    pub ext_amount: i64,
    pub fee: u64,
    pub encrypted_output: [Vec<u8>; 2],
    pub timestamp: i64,
}

#[event]
pub struct PoolPaused {
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolUnpaused {
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AuthorityUpdated {
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DepositCapUpdated {
    pub authority: Pubkey,
    pub previous_cap: u64,
    pub new_cap: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeesWithdrawn {
    pub authority: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
