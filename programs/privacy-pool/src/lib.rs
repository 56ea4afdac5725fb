//! Privacy pool: a two-input/two-output shielded-value verifier for a
//! single native-asset pool, with a Groth16 proof gate and an append-only
//! Poseidon commitment accumulator.

use anchor_lang::prelude::*;

pub mod crypto;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod tests;

use instructions::*;

declare_id!("Ddokrq1M6hT9Vu63k4JWqVRSecyLeotNf8xKknKfRwvZ");

#[program]
pub mod privacy_pool {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        tree_height: u8,
        root_ring_size: u16,
        deposit_cap: u64,
        mint: [u8; 32],
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, tree_height, root_ring_size, deposit_cap, mint)
    }

    pub fn set_verification_key(
        ctx: Context<SetVerificationKey>,
        vk_alpha_g1: [u8; 64],
        vk_beta_g2: [u8; 128],
        vk_gamma_g2: [u8; 128],
        vk_delta_g2: [u8; 128],
        vk_ic: Vec<[u8; 64]>,
    ) -> Result<()> {
        instructions::set_verification_key::handler(
            ctx,
            vk_alpha_g1,
            vk_beta_g2,
            vk_gamma_g2,
            vk_delta_g2,
            vk_ic,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn transact(
        ctx: Context<Transact>,
        proof_a: [u8; 32],
        proof_b: [u8; 64],
        proof_c: [u8; 32],
        root: [u8; 32],
        public_amount_input: [u8; 32],
        ext_data_hash_input: [u8; 32],
        input_nullifier0: [u8; 32],
        input_nullifier1: [u8; 32],
        output_commitment0: [u8; 32],
        output_commitment1: [u8; 32],
        mint: [u8; 32],
        recipient_bytes: [u8; 32],
        ext_amount: i64,
        fee: u64,
        fee_recipient: [u8; 32],
        ext_mint: [u8; 32],
        encrypted_output0: Vec<u8>,
        encrypted_output1: Vec<u8>,
    ) -> Result<()> {
        instructions::transact::handler(
            ctx,
            proof_a,
            proof_b,
            proof_c,
            root,
            public_amount_input,
            ext_data_hash_input,
            input_nullifier0,
            input_nullifier1,
            output_commitment0,
            output_commitment1,
            mint,
            recipient_bytes,
            ext_amount,
            fee,
            fee_recipient,
            ext_mint,
            encrypted_output0,
            encrypted_output1,
        )
    }

    pub fn pause_pool(ctx: Context<PausePool>) -> Result<()> {
        instructions::admin::pause::handler(ctx)
    }

    pub fn unpause_pool(ctx: Context<UnpausePool>) -> Result<()> {
        instructions::admin::unpause::handler(ctx)
    }

    pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::update_authority::handler(ctx, new_authority)
    }

    pub fn update_deposit_cap(ctx: Context<UpdateDepositCap>, new_cap: u64) -> Result<()> {
        instructions::admin::update_cap::handler(ctx, new_cap)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        instructions::admin::withdraw_fees::handler(ctx, amount)
    }
}
