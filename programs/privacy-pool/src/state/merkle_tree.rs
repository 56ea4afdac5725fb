//! Incremental Poseidon Merkle tree for commitment storage.
//!
//! Append-only, fixed height, filled-subtrees pattern for O(height)
//! insertion: only the rightmost hash at each level is kept, because
//! everything left of it has already been absorbed into a completed
//! parent pair.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use pool_crypto::field::FieldElement;
use pool_crypto::merkle;
use pool_crypto::poseidon;

/// Maximum supported tree height.
pub const MAX_TREE_HEIGHT: u8 = 26;

/// Minimum supported tree height.
pub const MIN_TREE_HEIGHT: u8 = 3;

/// Minimum root ring capacity.
pub const MIN_ROOT_RING_SIZE: u16 = 30;

/// Tree account.
///
/// PDA seed: `"merkle_tree"`. Layout mirrors the fixed-offset wire format:
/// authority | next_index | subtrees | root | root_ring | root_index |
/// deposit_cap | bump. `authority` is set once at `initialize` and not
/// read for authorization; [`crate::state::GlobalConfig::authority`] is
/// the source of truth there. `deposit_cap` is a cache kept in sync
/// whenever the global config's cap changes (see
/// `instructions::admin::update_cap`).
#[account]
pub struct MerkleTree {
    pub authority: Pubkey,
    pub next_index: u64,
    pub subtrees: Vec<[u8; 32]>,
    pub root: [u8; 32],
    pub root_ring: Vec<[u8; 32]>,
    pub root_index: u64,
    pub deposit_cap: u64,
    pub height: u8,
    pub bump: u8,
}

impl MerkleTree {
    pub fn space(height: u8, root_ring_size: u16) -> usize {
        let height = height as usize;
        let ring = root_ring_size as usize;
        8 // discriminator
            + 32 // authority
            + 8 // next_index
            + 4 + (32 * height) // subtrees
            + 32 // root
            + 4 + (32 * ring) // root_ring
            + 8 // root_index
            + 8 // deposit_cap
            + 1 // height
            + 1 // bump
    }

    pub fn initialize(
        &mut self,
        authority: Pubkey,
        height: u8,
        root_ring_size: u16,
        deposit_cap: u64,
        bump: u8,
    ) -> Result<()> {
        require!(
            (MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT).contains(&height),
            PrivacyError::InvalidTreeHeight
        );
        require!(
            root_ring_size >= MIN_ROOT_RING_SIZE,
            PrivacyError::InvalidRootRingSize
        );

        let zeros = compute_zero_values(height)?;

        self.authority = authority;
        self.next_index = 0;
        self.subtrees = zeros[..height as usize].to_vec();
        self.root = zeros[height as usize].to_le_bytes();
        self.root_ring = vec![[0u8; 32]; root_ring_size as usize];
        self.root_ring[0] = self.root;
        self.root_index = 0;
        self.deposit_cap = deposit_cap;
        self.height = height;
        self.bump = bump;

        Ok(())
    }

    pub fn capacity(&self) -> u64 {
        1u64 << self.height
    }

    pub fn is_full(&self) -> bool {
        self.next_index >= self.capacity()
    }

    /// Inserts `commitment` at `next_index`, walking the right-frontier.
    /// Returns the index the commitment was inserted at.
    pub fn insert(&mut self, commitment: [u8; 32]) -> Result<u64> {
        require!(!self.is_full(), PrivacyError::TreeFull);

        let zeros = compute_zero_values(self.height)?;
        let leaf_index = self.next_index;
        let mut current = FieldElement::from(commitment);
        let mut index = leaf_index;

        for level in 0..self.height as usize {
            if index & 1 == 1 {
                let left = FieldElement::from(self.subtrees[level]);
                current = hash2(left, current)?;
            } else {
                self.subtrees[level] = current.to_le_bytes();
                current = hash2(current, zeros[level])?;
            }
            index >>= 1;
        }

        self.root = current.to_le_bytes();
        let ring_len = self.root_ring.len() as u64;
        self.root_index = (self.root_index + 1) % ring_len;
        self.root_ring[self.root_index as usize] = self.root;
        self.next_index = self
            .next_index
            .checked_add(1)
            .ok_or(error!(PrivacyError::ArithmeticOverflow))?;

        Ok(leaf_index)
    }

    pub fn is_known_root(&self, root: &[u8; 32]) -> bool {
        self.root_ring.iter().any(|r| r == root)
    }
}

fn hash2(a: FieldElement, b: FieldElement) -> Result<FieldElement> {
    poseidon::hash2(a, b).map_err(|_| error!(PrivacyError::SerializationError))
}

/// `zeros[0]` is the canonical empty leaf, `zeros[i] = hash2(zeros[i-1], zeros[i-1])`.
/// Must match the circuit's zero values exactly.
pub fn compute_zero_values(height: u8) -> Result<Vec<FieldElement>> {
    let mut zeros = Vec::with_capacity(height as usize + 1);
    zeros.push(FieldElement::ZERO);
    for i in 1..=height {
        let prev = zeros[(i - 1) as usize];
        zeros.push(hash2(prev, prev)?);
    }
    Ok(zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_calculation() {
        let space = MerkleTree::space(20, 100);
        assert!(space < 10_000_000);
    }

    #[test]
    fn test_zero_values_deterministic() {
        let zeros1 = compute_zero_values(10).unwrap();
        let zeros2 = compute_zero_values(10).unwrap();
        assert_eq!(zeros1, zeros2);
    }

    #[test]
    fn test_matches_pool_crypto_accumulator() {
        // The on-chain stepping must agree bit-for-bit with the indexer's
        // pure accumulator, since both must converge on the same root.
        let leaves = [[1u8; 32], [2u8; 32], [3u8; 32]];

        let mut tree = MerkleTree {
            authority: Pubkey::default(),
            next_index: 0,
            subtrees: vec![],
            root: [0u8; 32],
            root_ring: vec![],
            root_index: 0,
            deposit_cap: 0,
            height: 0,
            bump: 0,
        };
        tree.initialize(Pubkey::default(), 3, 30, 0, 255).unwrap();

        let mut reference = merkle::Accumulator::new(3, 30).unwrap();
        for leaf in leaves {
            tree.insert(leaf).unwrap();
            reference.insert(FieldElement::from(leaf)).unwrap();
        }

        assert_eq!(tree.root, reference.root().to_le_bytes());
    }
}
