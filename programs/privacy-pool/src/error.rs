//! Program error taxonomy.
//!
//! Every check in the `Transact` state machine aborts with a distinct
//! variant; there is no partial state mutation on any failure path.

use anchor_lang::prelude::*;

#[error_code]
pub enum PrivacyError {
    /// Instruction data could not be parsed into the expected shape.
    #[msg("Invalid instruction data")]
    InvalidInstruction, // 6000

    /// Groth16 pairing check failed.
    #[msg("Invalid proof: pairing check failed")]
    InvalidProof, // 6001

    /// A public input is malformed or not canonically reduced.
    #[msg("Invalid public inputs for proof verification")]
    InvalidPublicInputs, // 6002

    /// Submitted root is not in the tree's recent-root ring.
    #[msg("Root not found in recent history")]
    UnknownRoot, // 6003

    /// `mint` public input does not match the pool's configured mint.
    #[msg("Mint does not match pool configuration")]
    MintMismatch, // 6004

    /// Recomputed envelope hash does not match the `extDataHash` public input.
    #[msg("External data hash does not match proof public input")]
    ExtDataHashMismatch, // 6005

    /// Recomputed `publicAmount` does not match the public input.
    #[msg("Public amount does not match proof public input")]
    PublicAmountMismatch, // 6006

    /// External deposit amount exceeds the pool's deposit cap.
    #[msg("Deposit amount exceeds pool cap")]
    DepositTooLarge, // 6007

    /// Merkle accumulator has reached its maximum capacity.
    #[msg("Merkle tree is full")]
    TreeFull, // 6008

    /// A passed marker account's address does not match its derived PDA.
    #[msg("Marker account address does not match derivation")]
    MarkerAddressMismatch, // 6009

    /// A nullifier marker already exists; the note has already been spent.
    #[msg("Nullifier already used")]
    NullifierAlreadyUsed, // 6010

    /// Pool is paused; only governance operations are accepted.
    #[msg("Pool is paused")]
    Paused, // 6011

    /// Caller is not the configured authority.
    #[msg("Unauthorized: caller is not pool authority")]
    Unauthorized, // 6012

    /// A checked arithmetic operation overflowed or underflowed its range.
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6013

    /// Borsh (de)serialization of account or instruction data failed.
    #[msg("Serialization error")]
    SerializationError, // 6014

    /// Verification key has not been set for this pool yet.
    #[msg("Verification key not configured for this pool")]
    VerificationKeyNotSet, // 6015

    /// A commitment or nullifier field element is all-zero.
    #[msg("Invalid nullifier: cannot be all zeros")]
    InvalidNullifier, // 6016

    /// Encrypted output payload exceeds the account's bounded size.
    #[msg("Encrypted output exceeds maximum length")]
    EncryptedOutputTooLarge, // 6017

    /// Requested tree height at initialization is out of the supported range.
    #[msg("Tree height must be between 3 and 26")]
    InvalidTreeHeight, // 6018

    /// Requested root ring size at initialization is too small to be useful.
    #[msg("Root ring size must be at least 30")]
    InvalidRootRingSize, // 6019
}
