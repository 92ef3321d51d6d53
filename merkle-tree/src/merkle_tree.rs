use crate::error::LedgerError;
use alloy_primitives::{keccak256, B256};
use log::debug;

/// Binary keccak256 merkle tree with sorted-pair node hashing.
///
/// Leaves are paired positionally, left to right, on every layer. A parent is
/// `keccak256(min(a, b) || max(a, b))` so the result does not depend on which child
/// was labeled left. The last node of an odd layer is promoted to the parent layer unchanged.
/// All layers are kept, `layers[0]` holds the leaves and the last layer the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<B256>>,
}

impl MerkleTree {
    pub fn new(leaves: &[B256]) -> Result<Self, LedgerError> {
        if leaves.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }

        let mut layers = vec![leaves.to_vec()];
        while let Some(layer) = layers.last().filter(|layer| layer.len() > 1) {
            let parent_layer = Self::reduce_layer(layer);
            debug!(
                "Merkle layer {} reduced {} nodes to {}",
                layers.len() - 1,
                layer.len(),
                parent_layer.len()
            );
            layers.push(parent_layer);
        }
        Ok(MerkleTree { layers })
    }

    fn reduce_layer(layer: &[B256]) -> Vec<B256> {
        layer
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_sorted_pair(left, right),
                [single] => *single,
                _ => unreachable!("chunks(2) yields one or two nodes"),
            })
            .collect()
    }

    pub fn get_root(&self) -> B256 {
        // the constructor refuses an empty leaf set, every layer has at least one node
        self.layers[self.layers.len() - 1][0]
    }

    pub fn leaves(&self) -> &[B256] {
        &self.layers[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of reductions from leaves to root, 0 for a single leaf tree.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn layers(&self) -> &[Vec<B256>] {
        &self.layers
    }
}

/// Hashes the lexicographically smaller node first.
pub fn hash_sorted_pair(a: &B256, b: &B256) -> B256 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut payload = [0_u8; 64];
    payload[..32].copy_from_slice(first.as_slice());
    payload[32..].copy_from_slice(second.as_slice());
    keccak256(payload)
}
