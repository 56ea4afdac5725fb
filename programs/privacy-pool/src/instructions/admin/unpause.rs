//! Authority-only: resumes `Transact` after a pause.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use crate::events::PoolUnpaused;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct UnpausePool<'info> {
    #[account(
        mut,
        seeds = [b"global_config"],
        bump = global_config.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UnpausePool>) -> Result<()> {
    ctx.accounts.global_config.set_paused(false);

    emit!(PoolUnpaused {
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("pool unpaused");
    Ok(())
}
