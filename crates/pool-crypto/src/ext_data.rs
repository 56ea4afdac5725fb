//! External-data envelope and its binding hash.
//!
//! `extDataHash` reduces everything observable on the ledger side of a
//! transaction to one field element the proof commits to, so a relay can
//! never redirect a withdrawal or tamper with the encrypted outputs without
//! invalidating the proof. `publicAmount` folds the signed external amount
//! and fee into a single non-negative field element, matching the
//! deposit/withdraw sign convention worked out against the Soroban privacy
//! pool's `calculate_public_amount` (same shape, different ledger).

use thiserror::Error;

use crate::field::FieldElement;
use crate::poseidon::{hash2, hash_many, HashError};

/// Domain separator so `extDataHash` can never collide with a commitment or
/// nullifier hash even if some inputs happened to coincide.
const EXT_DATA_DOMAIN: u64 = 0x45_58_54_44_41_54_41; // "EXTDATA" packed into a u64

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtDataError {
    #[error("|extAmount| + fee exceeds the representable range")]
    AmountOverflow,
    #[error("hashing failed")]
    Hash,
}

impl From<HashError> for ExtDataError {
    fn from(_: HashError) -> Self {
        ExtDataError::Hash
    }
}

/// The externally observable envelope a transaction's proof is bound to.
#[derive(Debug, Clone)]
pub struct ExtData {
    pub recipient: [u8; 32],
    /// Positive = deposit, negative = withdrawal.
    pub ext_amount: i64,
    pub fee: u64,
    pub fee_recipient: [u8; 32],
    pub mint: FieldElement,
    pub encrypted_output0: Vec<u8>,
    pub encrypted_output1: Vec<u8>,
}

impl ExtData {
    /// `extDataHash`, recomputed by the verifier from the submitted envelope
    /// and compared against the proof's public input.
    pub fn hash(&self) -> Result<FieldElement, ExtDataError> {
        let recipient = FieldElement::reduce_be(&self.recipient).map_err(|_| ExtDataError::Hash)?;
        let fee_recipient =
            FieldElement::reduce_be(&self.fee_recipient).map_err(|_| ExtDataError::Hash)?;
        let ext_amount_field = FieldElement::from_u64(self.ext_amount as u64);
        let fee_field = FieldElement::from_u64(self.fee);
        let enc0 = hash_encrypted_output(&self.encrypted_output0)?;
        let enc1 = hash_encrypted_output(&self.encrypted_output1)?;

        Ok(hash_many(&[
            FieldElement::from_u64(EXT_DATA_DOMAIN),
            recipient,
            ext_amount_field,
            fee_field,
            fee_recipient,
            self.mint,
            enc0,
            enc1,
        ])?)
    }
}

/// Absorbs an opaque, arbitrary-length blob into one field element: split
/// into 31-byte chunks (always below the field modulus regardless of
/// content) and fold them together with a length tag so a truncated blob
/// never collides with its untruncated prefix.
fn hash_encrypted_output(bytes: &[u8]) -> Result<FieldElement, ExtDataError> {
    let mut acc = FieldElement::from_u64(bytes.len() as u64);
    for chunk in bytes.chunks(31) {
        let mut buf = [0u8; 32];
        buf[32 - chunk.len()..].copy_from_slice(chunk);
        let chunk_field = FieldElement::reduce_be(&buf).map_err(|_| ExtDataError::Hash)?;
        acc = hash2(acc, chunk_field)?;
    }
    Ok(acc)
}

/// `publicAmount`: `extAmount - fee` folded into `[0, p)` when `extAmount >= 0`,
/// `p - (|extAmount| + fee)` otherwise.
pub fn public_amount(ext_amount: i64, fee: u64) -> Result<FieldElement, ExtDataError> {
    let abs_ext_amount = ext_amount.unsigned_abs();
    let sum = abs_ext_amount
        .checked_add(fee)
        .ok_or(ExtDataError::AmountOverflow)?;

    if ext_amount >= 0 {
        if fee > abs_ext_amount {
            let shortfall = fee - abs_ext_amount;
            Ok(FieldElement::from_u64(shortfall).neg())
        } else {
            Ok(FieldElement::from_u64(abs_ext_amount - fee))
        }
    } else {
        Ok(FieldElement::from_u64(sum).neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_public_amount_is_ext_amount_minus_fee() {
        let amount = public_amount(100, 10).unwrap();
        assert_eq!(amount, FieldElement::from_u64(90));
    }

    #[test]
    fn withdrawal_public_amount_wraps_to_negative_fold() {
        let amount = public_amount(-50, 5).unwrap();
        assert_eq!(amount, FieldElement::from_u64(55).neg());
    }

    #[test]
    fn zero_ext_amount_with_fee_still_folds() {
        let amount = public_amount(0, 3).unwrap();
        assert_eq!(amount, FieldElement::from_u64(3).neg());
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(
            public_amount(i64::MIN, u64::MAX),
            Err(ExtDataError::AmountOverflow)
        );
    }

    #[test]
    fn tampering_with_recipient_changes_hash() {
        let mut data = ExtData {
            recipient: [1u8; 32],
            ext_amount: 50,
            fee: 5,
            fee_recipient: [2u8; 32],
            mint: FieldElement::ZERO,
            encrypted_output0: vec![1, 2, 3],
            encrypted_output1: vec![4, 5, 6],
        };
        let original = data.hash().unwrap();
        data.recipient[0] = 0xff;
        assert_ne!(original, data.hash().unwrap());
    }

    #[test]
    fn encrypted_output_length_is_domain_separated() {
        // A blob and its own prefix must not collide even though the
        // shared prefix chunks are identical.
        let short = hash_encrypted_output(&[1, 2, 3]).unwrap();
        let long = hash_encrypted_output(&[1, 2, 3, 0]).unwrap();
        assert_ne!(short, long);
    }
}
