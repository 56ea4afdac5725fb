//! `Transact`: the single two-input/two-output instruction that replaces
//! separate deposit/withdraw/transfer paths. One constant circuit shape,
//! twelve ordered checks, enforced exactly as laid out below.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

use crate::crypto::groth16::{self, CompressedProof};
use crate::crypto::public_inputs::TransactPublicInputs;
use crate::error::PrivacyError;
use crate::events::Transacted;
use crate::state::{
    commitment_marker, nullifier_marker, verification_key::VerificationKeyAccount,
    CommitmentMarker, GlobalConfig, MerkleTree, NullifierMarker,
};
use pool_crypto::ext_data::{public_amount, ExtData};
use pool_crypto::field::FieldElement;

/// Reverses byte order: BE proof-public-input encoding to LE storage
/// encoding, for canonical (already-reduced) field elements this is a pure
/// reversal, no further reduction needed.
fn reverse32(bytes: &[u8; 32]) -> [u8; 32] {
    let mut out = *bytes;
    out.reverse();
    out
}

#[derive(Accounts)]
#[instruction(
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
)]
pub struct Transact<'info> {
    #[account(seeds = [b"global_config"], bump = global_config.bump)]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [b"merkle_tree"],
        bump = tree.bump,
        constraint = tree.key() == global_config.tree @ PrivacyError::Unauthorized,
    )]
    pub tree: Box<Account<'info, MerkleTree>>,

    #[account(seeds = [b"verification_key"], bump = verification_key.bump)]
    pub verification_key: Box<Account<'info, VerificationKeyAccount>>,

    #[account(
        init,
        payer = signer,
        space = NullifierMarker::LEN,
        seeds = [nullifier_marker::seed_prefix(0), &reverse32(&input_nullifier0)],
        bump,
    )]
    pub nullifier_marker_0: Box<Account<'info, NullifierMarker>>,

    #[account(
        init,
        payer = signer,
        space = NullifierMarker::LEN,
        seeds = [nullifier_marker::seed_prefix(1), &reverse32(&input_nullifier1)],
        bump,
    )]
    pub nullifier_marker_1: Box<Account<'info, NullifierMarker>>,

    #[account(
        init,
        payer = signer,
        space = CommitmentMarker::space(commitment_marker::MAX_ENCRYPTED_OUTPUT_LEN),
        seeds = [commitment_marker::seed_prefix(0), &reverse32(&output_commitment0)],
        bump,
    )]
    pub commitment_marker_0: Box<Account<'info, CommitmentMarker>>,

    #[account(
        init,
        payer = signer,
        space = CommitmentMarker::space(commitment_marker::MAX_ENCRYPTED_OUTPUT_LEN),
        seeds = [commitment_marker::seed_prefix(1), &reverse32(&output_commitment1)],
        bump,
    )]
    pub commitment_marker_1: Box<Account<'info, CommitmentMarker>>,

    #[account(mut, seeds = [b"tree_token"], bump)]
    pub tree_vault: SystemAccount<'info>,

    #[account(mut, seeds = [b"fee_vault"], bump)]
    pub fee_vault: SystemAccount<'info>,

    /// Receives lamports on a withdrawal, untouched on a pure deposit.
    #[account(
        mut,
        constraint = recipient.key().to_bytes() == recipient_bytes @ PrivacyError::ExtDataHashMismatch,
    )]
    pub recipient: SystemAccount<'info>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
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
    // 1. Pool must be unpaused.
    ctx.accounts.global_config.require_not_paused()?;

    // (Marker account addresses are checked by the `seeds`/`bump` PDA
    // derivation on each marker account above; a mismatched address fails
    // account resolution before this handler runs at all.)

    // 3. Mint public input must match the pool's configured mint.
    require!(mint == ctx.accounts.global_config.mint, PrivacyError::MintMismatch);

    // 4. Root must be live in the tree's ring.
    require!(ctx.accounts.tree.is_known_root(&root), PrivacyError::UnknownRoot);

    require!(
        encrypted_output0.len() <= commitment_marker::MAX_ENCRYPTED_OUTPUT_LEN
            && encrypted_output1.len() <= commitment_marker::MAX_ENCRYPTED_OUTPUT_LEN,
        PrivacyError::EncryptedOutputTooLarge
    );

    // 5. Recompute extDataHash from the envelope and compare.
    let ext_data = ExtData {
        recipient: recipient_bytes,
        ext_amount,
        fee,
        fee_recipient,
        mint: FieldElement::reduce_be(&ext_mint).map_err(|_| error!(PrivacyError::InvalidPublicInputs))?,
        encrypted_output0: encrypted_output0.clone(),
        encrypted_output1: encrypted_output1.clone(),
    };
    let recomputed_ext_hash = ext_data
        .hash()
        .map_err(|_| error!(PrivacyError::ArithmeticOverflow))?;
    require!(
        recomputed_ext_hash.to_be_bytes() == ext_data_hash_input,
        PrivacyError::ExtDataHashMismatch
    );

    // 6. Recompute publicAmount and compare.
    let recomputed_public_amount =
        public_amount(ext_amount, fee).map_err(|_| error!(PrivacyError::ArithmeticOverflow))?;
    require!(
        recomputed_public_amount.to_be_bytes() == public_amount_input,
        PrivacyError::PublicAmountMismatch
    );

    // 7. Deposit cap.
    if ext_amount >= 0 {
        require!(
            (ext_amount as u64) <= ctx.accounts.global_config.deposit_cap,
            PrivacyError::DepositTooLarge
        );
    }

    // 8. Verify the Groth16 proof against the stored verifying key.
    ctx.accounts.verification_key.require_initialized()?;
    let public_inputs = TransactPublicInputs::new(
        root,
        public_amount_input,
        ext_data_hash_input,
        [input_nullifier0, input_nullifier1],
        [output_commitment0, output_commitment1],
        mint,
    );
    public_inputs
        .validate()
        .map_err(|_| error!(PrivacyError::InvalidPublicInputs))?;

    let compressed = CompressedProof {
        a: proof_a,
        b: proof_b,
        c: proof_c,
    };
    groth16::verify(
        &compressed,
        &public_inputs.to_field_elements(),
        &ctx.accounts.verification_key,
    )
    .map_err(|_| error!(PrivacyError::InvalidProof))?;

    // 9. Nullifier markers: `init` above already created them atomically;
    // a second attempt to spend either nullifier would have failed account
    // creation outright. Just stamp their metadata.
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let slot = clock.slot;
    ctx.accounts.nullifier_marker_0.initialize(
        input_nullifier0,
        now,
        slot,
        ctx.bumps.nullifier_marker_0,
    );
    ctx.accounts.nullifier_marker_1.initialize(
        input_nullifier1,
        now,
        slot,
        ctx.bumps.nullifier_marker_1,
    );

    // 10. Insert the two output commitments and persist their markers.
    let index0 = ctx.accounts.tree.insert(output_commitment0)?;
    let index1 = ctx.accounts.tree.insert(output_commitment1)?;
    ctx.accounts.commitment_marker_0.initialize(
        output_commitment0,
        encrypted_output0.clone(),
        index0,
        ctx.bumps.commitment_marker_0,
    );
    ctx.accounts.commitment_marker_1.initialize(
        output_commitment1,
        encrypted_output1.clone(),
        index1,
        ctx.bumps.commitment_marker_1,
    );

    // 11. Move value.
    move_value(&ctx, ext_amount, fee)?;

    // 12. Book-keeping and ordered event for the indexer.
    ctx.accounts.global_config.record_slot(slot);

    emit!(Transacted {
        input_nullifier: [input_nullifier0, input_nullifier1],
        output_commitment: [output_commitment0, output_commitment1],
        output_index: [index0, index1],
        root: ctx.accounts.tree.root,
        ext_amount,
        fee,
        encrypted_output: [encrypted_output0, encrypted_output1],
        timestamp: now,
    });

    msg!("transact accepted, ext_amount={} fee={}", ext_amount, fee);
    Ok(())
}

fn move_value(ctx: &Context<Transact>, ext_amount: i64, fee: u64) -> Result<()> {
    let signer_info = ctx.accounts.signer.to_account_info();
    let tree_vault_info = ctx.accounts.tree_vault.to_account_info();
    let fee_vault_info = ctx.accounts.fee_vault.to_account_info();
    let recipient_info = ctx.accounts.recipient.to_account_info();
    let system_program_info = ctx.accounts.system_program.to_account_info();

    if ext_amount > 0 {
        let ext_amount = ext_amount as u64;
        let to_vault = ext_amount
            .checked_sub(fee)
            .ok_or(error!(PrivacyError::ArithmeticOverflow))?;

        invoke(
            &system_instruction::transfer(&signer_info.key(), &tree_vault_info.key(), to_vault),
            &[signer_info.clone(), tree_vault_info.clone(), system_program_info.clone()],
        )?;
        if fee > 0 {
            invoke(
                &system_instruction::transfer(&signer_info.key(), &fee_vault_info.key(), fee),
                &[signer_info.clone(), fee_vault_info.clone(), system_program_info.clone()],
            )?;
        }
    } else if ext_amount < 0 {
        let withdrawn = ext_amount.unsigned_abs();
        let total = withdrawn
            .checked_add(fee)
            .ok_or(error!(PrivacyError::ArithmeticOverflow))?;
        require!(
            **tree_vault_info.try_borrow_lamports()? >= total,
            PrivacyError::ArithmeticOverflow
        );

        **tree_vault_info.try_borrow_mut_lamports()? -= total;
        **recipient_info.try_borrow_mut_lamports()? += withdrawn;
        if fee > 0 {
            **fee_vault_info.try_borrow_mut_lamports()? += fee;
        }
    } else if fee > 0 {
        invoke(
            &system_instruction::transfer(&signer_info.key(), &fee_vault_info.key(), fee),
            &[signer_info.clone(), fee_vault_info.clone(), system_program_info.clone()],
        )?;
    }

    Ok(())
}
