//! `Initialize`: creates the global config, the tree account, the
//! verification key slot, and the two lamport vault PDAs. Callable once.

use anchor_lang::prelude::*;

use crate::events::PoolInitialized;
use crate::state::{
    merkle_tree::MerkleTree,
    verification_key::VerificationKeyAccount,
    GlobalConfig,
};

#[derive(Accounts)]
#[instruction(tree_height: u8, root_ring_size: u16, deposit_cap: u64, mint: [u8; 32])]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = authority,
        space = GlobalConfig::LEN,
        seeds = [b"global_config"],
        bump
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        init,
        payer = authority,
        space = MerkleTree::space(tree_height, root_ring_size),
        seeds = [b"merkle_tree"],
        bump
    )]
    pub tree: Box<Account<'info, MerkleTree>>,

    #[account(
        init,
        payer = authority,
        space = VerificationKeyAccount::space(),
        seeds = [b"verification_key"],
        bump
    )]
    pub verification_key: Box<Account<'info, VerificationKeyAccount>>,

    /// Lamport-only PDA; holds pooled deposits. No account data of its own.
    #[account(mut, seeds = [b"tree_token"], bump)]
    pub tree_vault: SystemAccount<'info>,

    /// Lamport-only PDA; holds accumulated fees.
    #[account(mut, seeds = [b"fee_vault"], bump)]
    pub fee_vault: SystemAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    tree_height: u8,
    root_ring_size: u16,
    deposit_cap: u64,
    mint: [u8; 32],
) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    let tree = &mut ctx.accounts.tree;
    ctx.accounts.verification_key.bump = ctx.bumps.verification_key;

    tree.initialize(
        ctx.accounts.authority.key(),
        tree_height,
        root_ring_size,
        deposit_cap,
        ctx.bumps.tree,
    )?;

    global_config.initialize(
        ctx.accounts.authority.key(),
        mint,
        deposit_cap,
        tree.key(),
        ctx.accounts.tree_vault.key(),
        ctx.accounts.fee_vault.key(),
        ctx.bumps.global_config,
    );

    emit!(PoolInitialized {
        authority: ctx.accounts.authority.key(),
        mint,
        tree_height,
        root_ring_size,
        deposit_cap,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("pool initialized, tree height {}", tree_height);
    Ok(())
}
