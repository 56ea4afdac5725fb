//! Authority-only emergency stop: blocks `Transact` while leaving
//! governance operations available.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use crate::events::PoolPaused;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct PausePool<'info> {
    #[account(
        mut,
        seeds = [b"global_config"],
        bump = global_config.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<PausePool>) -> Result<()> {
    ctx.accounts.global_config.set_paused(true);

    emit!(PoolPaused {
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("pool paused");
    Ok(())
}
