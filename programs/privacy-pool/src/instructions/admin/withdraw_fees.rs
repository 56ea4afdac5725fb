//! Authority-only: drains the fee vault to a destination, respecting the
//! vault's own rent-exempt minimum.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use crate::events::FeesWithdrawn;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(
        seeds = [b"global_config"],
        bump = global_config.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [b"fee_vault"],
        bump,
        constraint = fee_vault.key() == global_config.fee_vault @ PrivacyError::Unauthorized,
    )]
    pub fee_vault: SystemAccount<'info>,

    /// CHECK: plain lamport destination, no data interpreted.
    #[account(mut)]
    pub destination: AccountInfo<'info>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
    let rent_exempt_minimum = Rent::get()?.minimum_balance(0);
    let vault_info = ctx.accounts.fee_vault.to_account_info();
    let available = vault_info
        .lamports()
        .checked_sub(rent_exempt_minimum)
        .ok_or(error!(PrivacyError::ArithmeticOverflow))?;
    require!(amount <= available, PrivacyError::ArithmeticOverflow);

    **vault_info.try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.destination.try_borrow_mut_lamports()? += amount;

    emit!(FeesWithdrawn {
        authority: ctx.accounts.authority.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("withdrew {} lamports in fees", amount);
    Ok(())
}
