//! Note, shared keypair, commitment and nullifier derivation.
//!
//! The circuit fixes the exact combiner bit-for-bit; this mirrors it so the
//! verifier and any off-chain tooling agree with the proof.

use crate::field::FieldElement;
use crate::poseidon::{hash2, HashError};

/// An unspent note. `index` is only known once the note's commitment has
/// been inserted into the accumulator; it is required to compute a nullifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub amount: u64,
    pub blinding: FieldElement,
    pub pubkey: FieldElement,
    pub mint: FieldElement,
}

impl Note {
    /// The canonical zero-amount note filling an unused input/output slot.
    pub fn dummy(pubkey: FieldElement, blinding: FieldElement, mint: FieldElement) -> Self {
        Self {
            amount: 0,
            blinding,
            pubkey,
            mint,
        }
    }

    /// `commitment = H(H(mint, amount), H(pubkey, blinding))`.
    pub fn commitment(&self) -> Result<FieldElement, HashError> {
        let left = hash2(self.mint, FieldElement::from_u64(self.amount))?;
        let right = hash2(self.pubkey, self.blinding)?;
        hash2(left, right)
    }
}

/// A per-transaction keypair shared across all of a transaction's inputs
/// and outputs, derived deterministically from wallet material so a wallet
/// can re-derive it while rescanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keypair {
    pub privkey: FieldElement,
}

impl Keypair {
    pub fn from_privkey(privkey: FieldElement) -> Self {
        Self { privkey }
    }

    /// `pubkey = H(privkey)`. Poseidon has no unary form, so the second
    /// argument is a fixed domain-zero to avoid colliding with any
    /// two-argument hash elsewhere in the protocol.
    pub fn pubkey(&self) -> Result<FieldElement, HashError> {
        hash2(self.privkey, FieldElement::ZERO)
    }

    /// `sig = H(privkey, commitment, index)`, folded pairwise:
    /// `H(privkey, H(commitment, index))`.
    pub fn sign(&self, commitment: FieldElement, index: u64) -> Result<FieldElement, HashError> {
        let inner = hash2(commitment, FieldElement::from_u64(index))?;
        hash2(self.privkey, inner)
    }
}

/// `nullifier = H(H(commitment, index), sig)`.
pub fn nullifier(
    keypair: &Keypair,
    commitment: FieldElement,
    index: u64,
) -> Result<FieldElement, HashError> {
    let sig = keypair.sign(commitment, index)?;
    let inner = hash2(commitment, FieldElement::from_u64(index))?;
    hash2(inner, sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kp(seed: u64) -> Keypair {
        Keypair::from_privkey(FieldElement::from_u64(seed))
    }

    #[test]
    fn commitment_depends_only_on_mint_amount_pubkey_blinding() {
        let pubkey = kp(1).pubkey().unwrap();
        let mint = FieldElement::from_u64(9);
        let blinding = FieldElement::from_u64(5);

        let a = Note {
            amount: 10,
            blinding,
            pubkey,
            mint,
        };
        let b = a;
        assert_eq!(a.commitment().unwrap(), b.commitment().unwrap());

        let mut different_amount = a;
        different_amount.amount = 11;
        assert_ne!(a.commitment().unwrap(), different_amount.commitment().unwrap());

        let mut different_blinding = a;
        different_blinding.blinding = FieldElement::from_u64(6);
        assert_ne!(a.commitment().unwrap(), different_blinding.commitment().unwrap());
    }

    #[test]
    fn nullifier_requires_matching_privkey() {
        let commitment = FieldElement::from_u64(77);
        let owner = kp(1);
        let impostor = kp(2);

        let owner_null = nullifier(&owner, commitment, 0).unwrap();
        let impostor_null = nullifier(&impostor, commitment, 0).unwrap();
        assert_ne!(owner_null, impostor_null);
    }

    #[test]
    fn nullifier_differs_by_index() {
        let owner = kp(1);
        let commitment = FieldElement::from_u64(77);
        assert_ne!(
            nullifier(&owner, commitment, 0).unwrap(),
            nullifier(&owner, commitment, 1).unwrap()
        );
    }

    #[test]
    fn dummy_note_has_zero_amount() {
        let pubkey = kp(3).pubkey().unwrap();
        let note = Note::dummy(pubkey, FieldElement::from_u64(1), FieldElement::from_u64(0));
        assert_eq!(note.amount, 0);
    }
}
