//! Authority-only: updates the pool-wide deposit cap.
//!
//! The tree account carries a cached copy of the cap to honor the fixed
//! wire-layout table; both copies are updated together.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use crate::events::DepositCapUpdated;
use crate::state::{merkle_tree::MerkleTree, GlobalConfig};

#[derive(Accounts)]
pub struct UpdateDepositCap<'info> {
    #[account(
        mut,
        seeds = [b"global_config"],
        bump = global_config.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [b"merkle_tree"],
        bump = tree.bump,
        constraint = tree.key() == global_config.tree @ PrivacyError::Unauthorized,
    )]
    pub tree: Account<'info, MerkleTree>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateDepositCap>, new_cap: u64) -> Result<()> {
    let previous_cap = ctx.accounts.global_config.deposit_cap;
    ctx.accounts.global_config.set_deposit_cap(new_cap);
    ctx.accounts.tree.deposit_cap = new_cap;

    emit!(DepositCapUpdated {
        authority: ctx.accounts.authority.key(),
        previous_cap,
        new_cap,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("deposit cap updated to {}", new_cap);
    Ok(())
}
