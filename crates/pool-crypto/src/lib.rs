//! Shared field, Poseidon, Merkle accumulator and note/envelope logic for
//! the privacy pool program and its off-chain indexer.
//!
//! Kept as its own crate so the two can never drift: the indexer's
//! in-memory tree replica and the program's on-chain tree must hash
//! identically or `indexer.root() == tree.root` stops holding.

pub mod ext_data;
pub mod field;
pub mod merkle;
pub mod note;
pub mod poseidon;

pub use ext_data::{public_amount, ExtData, ExtDataError};
pub use field::{FieldElement, FieldError};
pub use merkle::{Accumulator, AccumulatorError, MerkleProof};
pub use note::{nullifier, Keypair, Note};
pub use poseidon::{hash2, hash_many, HashError};
