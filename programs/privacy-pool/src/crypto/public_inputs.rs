//! Public inputs for the transaction circuit.
//!
//! The circuit exposes exactly eight public inputs, in this fixed order:
//! root, publicAmount, extDataHash, inputNullifier0, inputNullifier1,
//! outputCommitment0, outputCommitment1, mint. Every field is a 32-byte
//! big-endian BN254 scalar-field element, matching the encoding the
//! precompile pairing check expects.

use anchor_lang::prelude::*;

use crate::crypto::groth16::is_less_than_bn254_field_size_be;
use crate::error::PrivacyError;
use crate::state::verification_key::NUM_PUBLIC_INPUTS;

/// Public inputs for one `Transact` proof, in circuit order.
#[derive(Clone, Debug)]
pub struct TransactPublicInputs {
    pub root: [u8; 32],
    pub public_amount: [u8; 32],
    pub ext_data_hash: [u8; 32],
    pub input_nullifier: [[u8; 32]; 2],
    pub output_commitment: [[u8; 32]; 2],
    pub mint: [u8; 32],
}

impl TransactPublicInputs {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        root: [u8; 32],
        public_amount: [u8; 32],
        ext_data_hash: [u8; 32],
        input_nullifier: [[u8; 32]; 2],
        output_commitment: [[u8; 32]; 2],
        mint: [u8; 32],
    ) -> Self {
        Self {
            root,
            public_amount,
            ext_data_hash,
            input_nullifier,
            output_commitment,
            mint,
        }
    }

    /// Every field must already be reduced mod the BN254 scalar field; the
    /// precompile pairing check silently misbehaves on out-of-range inputs
    /// rather than rejecting them, so this is checked up front instead.
    pub fn validate(&self) -> Result<()> {
        for field in self.to_field_elements().iter() {
            require!(
                is_less_than_bn254_field_size_be(field),
                PrivacyError::InvalidPublicInputs
            );
        }

        require!(
            self.input_nullifier[0] != self.input_nullifier[1],
            PrivacyError::InvalidNullifier
        );

        Ok(())
    }

    /// Flatten to the exact order the verifying key's `vk_ic` entries expect.
    pub fn to_field_elements(&self) -> [[u8; 32]; NUM_PUBLIC_INPUTS] {
        [
            self.root,
            self.public_amount,
            self.ext_data_hash,
            self.input_nullifier[0],
            self.input_nullifier[1],
            self.output_commitment[0],
            self.output_commitment[1],
            self.mint,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(root: [u8; 32]) -> TransactPublicInputs {
        TransactPublicInputs::new(
            root,
            [1u8; 32],
            [2u8; 32],
            [[3u8; 32], [4u8; 32]],
            [[5u8; 32], [6u8; 32]],
            [7u8; 32],
        )
    }

    #[test]
    fn field_order_matches_circuit_layout() {
        let inputs = sample([9u8; 32]);
        let flat = inputs.to_field_elements();
        assert_eq!(flat[0], inputs.root);
        assert_eq!(flat[1], inputs.public_amount);
        assert_eq!(flat[2], inputs.ext_data_hash);
        assert_eq!(flat[3], inputs.input_nullifier[0]);
        assert_eq!(flat[4], inputs.input_nullifier[1]);
        assert_eq!(flat[5], inputs.output_commitment[0]);
        assert_eq!(flat[6], inputs.output_commitment[1]);
        assert_eq!(flat[7], inputs.mint);
    }

    #[test]
    fn valid_inputs_pass() {
        let mut small = [0u8; 32];
        small[31] = 1;
        let mut other = small;
        other[31] = 2;
        let inputs = TransactPublicInputs::new(
            small,
            small,
            small,
            [small, other],
            [small, small],
            small,
        );
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn field_at_or_above_modulus_rejected() {
        let fr_modulus_bytes: [u8; 32] = [
            0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81,
            0x58, 0x5d, 0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16,
            0xd8, 0x7c, 0xfd, 0x48,
        ];
        let inputs = sample(fr_modulus_bytes);
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn duplicate_input_nullifiers_rejected() {
        let mut small = [0u8; 32];
        small[31] = 1;
        let inputs = TransactPublicInputs::new(small, small, small, [small, small], [small, small], small);
        assert!(inputs.validate().is_err());
    }
}
