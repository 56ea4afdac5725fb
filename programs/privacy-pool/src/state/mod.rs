//! On-chain account layouts.
//!
//! - `GlobalConfig` (seed `"global_config"`): authority, mint tag, deposit
//!   cap, pause flag.
//! - `MerkleTree` (seed `"merkle_tree"`): the Poseidon accumulator's
//!   right-frontier, current root and root ring.
//! - `VerificationKeyAccount` (seed `"verification_key"`): the compiled
//!   Groth16 verifying key.
//! - `NullifierMarker` (seed `"nullifier{k}"`): per-slot spent-nullifier
//!   sentinel.
//! - `CommitmentMarker` (seed `"commitment{k}"`): per-slot inserted-output
//!   sentinel, carrying its encrypted payload and tree index.
//!
//! Tree vault and fee vault are plain system-owned PDAs (seeds
//! `"tree_token"` / fixed fee-recipient address); they carry no account
//! data of their own, only lamports, so they have no type here.

pub mod commitment_marker;
pub mod global_config;
pub mod merkle_tree;
pub mod nullifier_marker;
pub mod verification_key;

pub use commitment_marker::CommitmentMarker;
pub use global_config::GlobalConfig;
pub use merkle_tree::MerkleTree;
pub use nullifier_marker::NullifierMarker;
pub use verification_key::VerificationKeyAccount;
