//! Compiled Groth16 verifying key for the transaction circuit.
//!
//! The circuit and trusted-setup ceremony that produce this key are out of
//! scope here; only the key's storage and the interface to load it are.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;

/// Number of public inputs the transaction circuit exposes:
/// root, publicAmount, extDataHash, inputNullifier0/1, outputCommitment0/1, mint.
pub const NUM_PUBLIC_INPUTS: usize = 8;

/// `vk_ic` has one more entry than there are public inputs (the constant term).
pub const IC_LEN: usize = NUM_PUBLIC_INPUTS + 1;

/// PDA seed: `"verification_key"`.
#[account]
pub struct VerificationKeyAccount {
    pub vk_alpha_g1: [u8; 64],
    pub vk_beta_g2: [u8; 128],
    pub vk_gamma_g2: [u8; 128],
    pub vk_delta_g2: [u8; 128],
    pub vk_ic: Vec<[u8; 64]>,
    pub is_initialized: bool,
    pub bump: u8,
}

impl VerificationKeyAccount {
    pub fn space() -> usize {
        8 // discriminator
            + 64 // alpha_g1
            + 128 // beta_g2
            + 128 // gamma_g2
            + 128 // delta_g2
            + 4 + (64 * IC_LEN) // vk_ic
            + 1 // is_initialized
            + 1 // bump
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        vk_alpha_g1: [u8; 64],
        vk_beta_g2: [u8; 128],
        vk_gamma_g2: [u8; 128],
        vk_delta_g2: [u8; 128],
        vk_ic: Vec<[u8; 64]>,
        bump: u8,
    ) -> Result<()> {
        require!(vk_ic.len() == IC_LEN, PrivacyError::InvalidPublicInputs);
        require!(vk_alpha_g1 != [0u8; 64], PrivacyError::InvalidPublicInputs);
        require!(vk_ic[0] != [0u8; 64], PrivacyError::InvalidPublicInputs);

        self.vk_alpha_g1 = vk_alpha_g1;
        self.vk_beta_g2 = vk_beta_g2;
        self.vk_gamma_g2 = vk_gamma_g2;
        self.vk_delta_g2 = vk_delta_g2;
        self.vk_ic = vk_ic;
        self.is_initialized = true;
        self.bump = bump;
        Ok(())
    }

    pub fn require_initialized(&self) -> Result<()> {
        require!(self.is_initialized, PrivacyError::VerificationKeyNotSet);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ic_len_is_public_inputs_plus_one() {
        assert_eq!(IC_LEN, NUM_PUBLIC_INPUTS + 1);
    }
}
