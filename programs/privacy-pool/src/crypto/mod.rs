//! Cryptographic primitives used on-chain.
//!
//! - `groth16`: Groth16 proof verification over BN254 via Solana's
//!   alt_bn128 precompiles, against the stored verifying key.
//! - `public_inputs`: the fixed eight-field public-input layout the
//!   transaction circuit exposes.
//!
//! Field arithmetic, Poseidon hashing and the Merkle accumulator itself
//! live in `pool-crypto`, shared with the off-chain indexer so both sides
//! compute bit-identical roots.

pub mod groth16;
pub mod public_inputs;

pub use groth16::{verify, CompressedProof};
pub use public_inputs::TransactPublicInputs;
