//! Pool-wide configuration: authority, deposit cap, pause state.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;

/// PDA seed: `"global_config"`.
#[account]
pub struct GlobalConfig {
    /// May pause/unpause, update the cap, update the verification key,
    /// withdraw accumulated fees, and transfer authority.
    pub authority: Pubkey,

    /// Canonical native-mint tag hashed into every commitment and the
    /// external-data envelope; fixed at initialization.
    pub mint: [u8; 32],

    /// Upper bound on a single deposit's external amount.
    pub deposit_cap: u64,

    /// Blocks `Transact` while `true`; governance operations still work.
    pub is_paused: bool,

    /// Ledger slot of the most recently accepted transaction.
    pub last_processed_slot: u64,

    pub tree: Pubkey,
    pub tree_vault: Pubkey,
    pub fee_vault: Pubkey,

    pub bump: u8,
}

impl GlobalConfig {
    pub const LEN: usize = 8 // discriminator
        + 32 // authority
        + 32 // mint
        + 8  // deposit_cap
        + 1  // is_paused
        + 8  // last_processed_slot
        + 32 // tree
        + 32 // tree_vault
        + 32 // fee_vault
        + 1; // bump

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        mint: [u8; 32],
        deposit_cap: u64,
        tree: Pubkey,
        tree_vault: Pubkey,
        fee_vault: Pubkey,
        bump: u8,
    ) {
        self.authority = authority;
        self.mint = mint;
        self.deposit_cap = deposit_cap;
        self.is_paused = false;
        self.last_processed_slot = 0;
        self.tree = tree;
        self.tree_vault = tree_vault;
        self.fee_vault = fee_vault;
        self.bump = bump;
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, PrivacyError::Paused);
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    pub fn set_deposit_cap(&mut self, cap: u64) {
        self.deposit_cap = cap;
    }

    pub fn transfer_authority(&mut self, new_authority: Pubkey) {
        self.authority = new_authority;
    }

    pub fn record_slot(&mut self, slot: u64) {
        self.last_processed_slot = slot;
    }
}
