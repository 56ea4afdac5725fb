//! In-memory mirror of the on-chain commitment accumulator.
//!
//! Ingests commitment markers in index order, exactly as the ledger emits
//! them. The only writer is the ingest loop (webhook or poll); readers take
//! a shared lock via [`crate::state::AppState`].

use std::collections::HashMap;

use pool_crypto::field::FieldElement;
use pool_crypto::merkle::{Accumulator, MerkleProof};

use crate::error::IndexerError;

pub struct Replica {
    tree: Accumulator,
    leaves: Vec<FieldElement>,
    encrypted_outputs: Vec<Vec<u8>>,
    index_by_commitment: HashMap<FieldElement, u64>,
    blob_seen: HashMap<Vec<u8>, ()>,
}

impl Replica {
    pub fn new(height: u8, root_ring_size: usize) -> Self {
        Self {
            tree: Accumulator::new(height, root_ring_size)
                .expect("indexer replica height/ring must match the on-chain tree"),
            leaves: Vec::new(),
            encrypted_outputs: Vec::new(),
            index_by_commitment: HashMap::new(),
            blob_seen: HashMap::new(),
        }
    }

    pub fn height(&self) -> u8 {
        self.tree.height()
    }

    pub fn root(&self) -> FieldElement {
        self.tree.root()
    }

    pub fn next_index(&self) -> u64 {
        self.tree.next_index()
    }

    /// Idempotent, order-preserving ingest. See spec.md §4.6.
    pub fn ingest(
        &mut self,
        commitment: FieldElement,
        index: u64,
        encrypted_output: Vec<u8>,
    ) -> Result<(), IndexerError> {
        let current_size = self.leaves.len() as u64;

        if index == current_size {
            self.tree.insert(commitment).map_err(|e| {
                IndexerError::Internal(anyhow::anyhow!("accumulator insert failed: {e}"))
            })?;
            self.leaves.push(commitment);
            self.blob_seen.insert(encrypted_output.clone(), ());
            self.encrypted_outputs.push(encrypted_output);
            self.index_by_commitment.insert(commitment, index);
            return Ok(());
        }

        if index < current_size {
            let stored = self.leaves[index as usize];
            if stored == commitment {
                // Replay of an already-ingested marker: no-op.
                return Ok(());
            }
            tracing::warn!(
                index,
                "overwriting commitment at already-ingested index; on-chain replay \
                 of the same marker should be impossible"
            );
            self.leaves[index as usize] = commitment;
            self.encrypted_outputs[index as usize] = encrypted_output;
            self.index_by_commitment.insert(commitment, index);
            return Ok(());
        }

        Err(IndexerError::FutureIndex {
            index,
            expected: current_size,
        })
    }

    pub fn proof_by_index(&self, index: u64) -> MerkleProof {
        if index >= self.next_index() {
            return Accumulator::zero_proof(self.height());
        }
        Accumulator::proof_from_leaves(self.height(), &self.leaves, index)
            .unwrap_or_else(|_| Accumulator::zero_proof(self.height()))
    }

    pub fn proof_by_commitment(&self, commitment: &FieldElement) -> Option<MerkleProof> {
        let index = *self.index_by_commitment.get(commitment)?;
        Some(
            Accumulator::proof_from_leaves(self.height(), &self.leaves, index)
                .unwrap_or_else(|_| Accumulator::zero_proof(self.height())),
        )
    }

    pub fn encrypted_outputs_range(&self, start: u64, end: u64) -> Result<(&[Vec<u8>], bool, u64), IndexerError> {
        if start > end {
            return Err(IndexerError::InvalidRange);
        }
        let total = self.encrypted_outputs.len() as u64;
        let start = start.min(total);
        let end = end.min(total);
        let has_more = end < total;
        Ok((&self.encrypted_outputs[start as usize..end as usize], has_more, total))
    }

    pub fn all_encrypted_outputs(&self) -> &[Vec<u8>] {
        &self.encrypted_outputs
    }

    pub fn has_encrypted_output(&self, blob: &[u8]) -> bool {
        self.blob_seen.contains_key(blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commitment(n: u64) -> FieldElement {
        FieldElement::from_u64(n)
    }

    #[test]
    fn sequential_ingest_advances_next_index() {
        let mut replica = Replica::new(3, 30);
        replica.ingest(commitment(1), 0, vec![1]).unwrap();
        replica.ingest(commitment(2), 1, vec![2]).unwrap();
        assert_eq!(replica.next_index(), 2);
    }

    #[test]
    fn replaying_same_commitment_at_same_index_is_idempotent() {
        let mut replica = Replica::new(3, 30);
        replica.ingest(commitment(1), 0, vec![1]).unwrap();
        let root_before = replica.root();
        replica.ingest(commitment(1), 0, vec![1]).unwrap();
        assert_eq!(replica.root(), root_before);
        assert_eq!(replica.next_index(), 1);
    }

    #[test]
    fn future_indexed_insertion_is_rejected() {
        let mut replica = Replica::new(3, 30);
        let err = replica.ingest(commitment(1), 5, vec![1]).unwrap_err();
        assert!(matches!(err, IndexerError::FutureIndex { index: 5, expected: 0 }));
    }

    #[test]
    fn proof_by_index_of_unknown_index_is_all_zero() {
        let replica = Replica::new(3, 30);
        let proof = replica.proof_by_index(9);
        assert!(proof.path_elements.iter().all(|e| e.is_zero()));
    }

    #[test]
    fn proof_by_commitment_of_unknown_commitment_is_none() {
        let replica = Replica::new(3, 30);
        assert!(replica.proof_by_commitment(&commitment(42)).is_none());
    }

    #[test]
    fn encrypted_outputs_range_reports_has_more() {
        let mut replica = Replica::new(3, 30);
        for i in 0..4 {
            replica.ingest(commitment(i), i, vec![i as u8]).unwrap();
        }
        let (items, has_more, total) = replica.encrypted_outputs_range(0, 2).unwrap();
        assert_eq!(items.len(), 2);
        assert!(has_more);
        assert_eq!(total, 4);
    }

    #[test]
    fn has_encrypted_output_checks_membership() {
        let mut replica = Replica::new(3, 30);
        replica.ingest(commitment(1), 0, vec![9, 9, 9]).unwrap();
        assert!(replica.has_encrypted_output(&[9, 9, 9]));
        assert!(!replica.has_encrypted_output(&[1, 2, 3]));
    }
}
