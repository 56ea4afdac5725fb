//! Authority-only: loads the compiled Groth16 verifying key for the
//! transaction circuit. The circuit and its trusted-setup ceremony are out
//! of scope here; only the key's storage is.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use crate::events::VerificationKeySet;
use crate::state::{verification_key::IC_LEN, GlobalConfig, VerificationKeyAccount};

#[derive(Accounts)]
pub struct SetVerificationKey<'info> {
    #[account(
        seeds = [b"global_config"],
        bump = global_config.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [b"verification_key"],
        bump = verification_key.bump,
    )]
    pub verification_key: Account<'info, VerificationKeyAccount>,

    pub authority: Signer<'info>,
}

pub fn handler(
    ctx: Context<SetVerificationKey>,
    vk_alpha_g1: [u8; 64],
    vk_beta_g2: [u8; 128],
    vk_gamma_g2: [u8; 128],
    vk_delta_g2: [u8; 128],
    vk_ic: Vec<[u8; 64]>,
) -> Result<()> {
    let bump = ctx.accounts.verification_key.bump;
    ctx.accounts.verification_key.set(
        vk_alpha_g1,
        vk_beta_g2,
        vk_gamma_g2,
        vk_delta_g2,
        vk_ic.clone(),
        bump,
    )?;

    emit!(VerificationKeySet {
        authority: ctx.accounts.authority.key(),
        ic_length: vk_ic.len() as u8,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("verification key set, {} public inputs", IC_LEN - 1);
    Ok(())
}
