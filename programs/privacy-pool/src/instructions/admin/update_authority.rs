//! Authority-only: transfers pool governance to a new address.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use crate::events::AuthorityUpdated;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct UpdateAuthority<'info> {
    #[account(
        mut,
        seeds = [b"global_config"],
        bump = global_config.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
    let previous_authority = ctx.accounts.global_config.authority;
    ctx.accounts.global_config.transfer_authority(new_authority);

    emit!(AuthorityUpdated {
        previous_authority,
        new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("authority transferred to {}", new_authority);
    Ok(())
}
