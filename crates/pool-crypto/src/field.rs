//! BN254 scalar field element, canonically encoded as 32 bytes.
//!
//! Two byte directions are used throughout the pool: little-endian for
//! in-ledger storage, big-endian for proof public inputs. Both directions
//! are exposed here so callers never have to reverse bytes by hand.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use borsh::{BorshDeserialize, BorshSerialize};
use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    #[error("field input exceeds 32 bytes")]
    TooLong,
}

/// A BN254 scalar field element, stored as its canonical little-endian
/// encoding (value strictly less than the field modulus `p`).
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, BorshSerialize, BorshDeserialize)]
pub struct FieldElement(pub [u8; 32]);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement([0u8; 32]);

    /// Reduce big-endian bytes (the proof-public-input direction) modulo `p`.
    pub fn reduce_be(bytes: &[u8]) -> Result<Self, FieldError> {
        if bytes.len() > 32 {
            return Err(FieldError::TooLong);
        }
        Ok(Self::from_biguint(BigUint::from_bytes_be(bytes)))
    }

    /// Reduce little-endian bytes (the in-ledger storage direction) modulo `p`.
    pub fn reduce_le(bytes: &[u8]) -> Result<Self, FieldError> {
        if bytes.len() > 32 {
            return Err(FieldError::TooLong);
        }
        Ok(Self::from_biguint(BigUint::from_bytes_le(bytes)))
    }

    /// `true` iff `bytes` is already the canonical big-endian encoding of a
    /// value strictly less than the field modulus (no reduction needed).
    pub fn is_canonical_be(bytes: &[u8; 32]) -> bool {
        BigUint::from_bytes_be(bytes) < Fr::MODULUS.into()
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_fr(Fr::from(value))
    }

    /// Canonical little-endian encoding (storage direction).
    pub fn to_le_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Canonical big-endian encoding (hashing / public-input direction).
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = self.0;
        out.reverse();
        out
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Additive inverse modulo `p`. `neg(0) == 0`.
    pub fn neg(self) -> Self {
        Self::from_fr(-self.to_fr())
    }

    pub(crate) fn to_fr(self) -> Fr {
        Fr::from_le_bytes_mod_order(&self.0)
    }

    pub(crate) fn from_fr(fr: Fr) -> Self {
        let mut bytes = [0u8; 32];
        let repr = fr.into_bigint().to_bytes_le();
        bytes[..repr.len()].copy_from_slice(&repr);
        Self(bytes)
    }

    fn from_biguint(value: BigUint) -> Self {
        Self::from_fr(Fr::from_le_bytes_mod_order(&value.to_bytes_le()))
    }
}

impl From<[u8; 32]> for FieldElement {
    /// Interprets the bytes as an already-reduced little-endian encoding.
    /// Prefer [`FieldElement::reduce_le`] for untrusted input.
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement({})", hex_encode(&self.0))
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_rejects_oversized_input() {
        let bytes = [0u8; 33];
        assert_eq!(FieldElement::reduce_be(&bytes), Err(FieldError::TooLong));
        assert_eq!(FieldElement::reduce_le(&bytes), Err(FieldError::TooLong));
    }

    #[test]
    fn le_be_are_byte_reversals() {
        let f = FieldElement::from_u64(0x0102_0304);
        let le = f.to_le_bytes();
        let be = f.to_be_bytes();
        let mut reversed = le;
        reversed.reverse();
        assert_eq!(reversed, be);
    }

    #[test]
    fn zero_is_canonical() {
        assert!(FieldElement::is_canonical_be(&[0u8; 32]));
    }

    #[test]
    fn modulus_itself_is_not_canonical() {
        let modulus_be: BigUint = Fr::MODULUS.into();
        let bytes = modulus_be.to_bytes_be();
        let mut arr = [0u8; 32];
        arr[32 - bytes.len()..].copy_from_slice(&bytes);
        assert!(!FieldElement::is_canonical_be(&arr));
    }

    #[test]
    fn reduce_is_idempotent_on_canonical_values() {
        let a = FieldElement::from_u64(42);
        let roundtrip = FieldElement::reduce_le(&a.to_le_bytes()).unwrap();
        assert_eq!(a, roundtrip);
    }
}
