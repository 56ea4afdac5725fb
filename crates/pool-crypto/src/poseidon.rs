//! Poseidon hashing over the BN254 scalar field, arity 2.
//!
//! Parameters come from `light-poseidon`'s circom-compatible constants
//! (the same MDS matrix and round constants a circomlib circuit uses), since
//! the compiled verifying key this pool checks proofs against is fixed to
//! that parameterization and is not re-derivable here.

use light_poseidon::{Poseidon, PoseidonError, PoseidonHasher};
use thiserror::Error;

use crate::field::FieldElement;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("poseidon hashing failed: {0}")]
    Poseidon(#[from] PoseidonError),
}

/// `hash2(a, b)`: the single building block every tree node, commitment,
/// nullifier and the external-data hash is built from.
pub fn hash2(a: FieldElement, b: FieldElement) -> Result<FieldElement, HashError> {
    let mut hasher = Poseidon::<ark_bn254::Fr>::new_circom(2)?;
    let result = hasher.hash(&[a.to_fr(), b.to_fr()])?;
    Ok(FieldElement::from_fr(result))
}

/// Right-folded pairwise hash of an arbitrary-length sequence:
/// `hash_many([x0, x1, x2]) = hash2(x0, hash2(x1, x2))`.
pub fn hash_many(xs: &[FieldElement]) -> Result<FieldElement, HashError> {
    match xs.split_last() {
        None => Ok(FieldElement::ZERO),
        Some((last, rest)) => {
            let mut acc = *last;
            for x in rest.iter().rev() {
                acc = hash2(*x, acc)?;
            }
            Ok(acc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = FieldElement::from_u64(1);
        let b = FieldElement::from_u64(2);
        assert_eq!(hash2(a, b).unwrap(), hash2(a, b).unwrap());
    }

    #[test]
    fn not_commutative() {
        let a = FieldElement::from_u64(1);
        let b = FieldElement::from_u64(2);
        assert_ne!(hash2(a, b).unwrap(), hash2(b, a).unwrap());
    }

    #[test]
    fn hash_many_single_element_is_identity() {
        let a = FieldElement::from_u64(7);
        assert_eq!(hash_many(&[a]).unwrap(), a);
    }

    #[test]
    fn hash_many_matches_right_fold() {
        let x0 = FieldElement::from_u64(1);
        let x1 = FieldElement::from_u64(2);
        let x2 = FieldElement::from_u64(3);
        let expected = hash2(x0, hash2(x1, x2).unwrap()).unwrap();
        assert_eq!(hash_many(&[x0, x1, x2]).unwrap(), expected);
    }
}
