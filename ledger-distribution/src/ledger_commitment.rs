use alloy_primitives::{B256, U256};
use clap::ValueEnum;
use log::{debug, info};
use merkle_tree::{LedgerEntry, LedgerError, MerkleTree, RawWeight};
use std::collections::HashSet;

/// Order in which ledger entries become merkle tree leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LeafOrdering {
    /// Leaves sorted by address, the root does not depend on the ledger key order
    #[default]
    Canonical,
    /// Leaves in ledger key order, reproduces roots of tools hashing the config as written
    Insertion,
}

/// Merkle root and share accounting of one ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerCommitment {
    pub merkle_root: B256,
    pub total_weight: U256,
    pub leaf_count: usize,
}

impl LedgerCommitment {
    /// `0x` prefixed lowercase hex of the root
    pub fn merkle_root_hex(&self) -> String {
        format!("0x{}", hex::encode(self.merkle_root))
    }
}

/// Validates raw ledger records, the first invalid one fails the whole ledger.
pub fn parse_ledger(ledger: &[(String, RawWeight)]) -> Result<Vec<LedgerEntry>, LedgerError> {
    ledger
        .iter()
        .map(|(raw_address, raw_weight)| {
            let entry = LedgerEntry::parse(raw_address, raw_weight)?;
            debug!(
                "Ledger entry {raw_address} parsed as {} -> {}",
                entry.address, entry.weight
            );
            Ok(entry)
        })
        .collect()
}

fn ensure_unique_addresses(entries: &[LedgerEntry]) -> Result<(), LedgerError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.address) {
            return Err(LedgerError::DuplicateAddress {
                address: entry.address,
            });
        }
    }
    Ok(())
}

/// Sum of all weights, a zero sum is not a valid ledger.
pub fn total_weight(entries: &[LedgerEntry]) -> Result<U256, LedgerError> {
    let total = entries.iter().try_fold(U256::ZERO, |sum, entry| {
        sum.checked_add(entry.weight)
            .ok_or(LedgerError::TotalWeightOverflow)
    })?;
    if total.is_zero() {
        return Err(LedgerError::TotalWeightZero);
    }
    Ok(total)
}

/// Sort entries to ensure a deterministic leaf order for the same ledger content.
/// This guarantees the same merkle root regardless of the order the ledger was written in.
pub fn sort_entries_deterministically(entries: &mut [LedgerEntry]) {
    entries.sort_by_key(|entry| entry.address);
}

pub fn build_commitment_from_entries(
    mut entries: Vec<LedgerEntry>,
    leaf_ordering: LeafOrdering,
) -> Result<LedgerCommitment, LedgerError> {
    if entries.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }
    ensure_unique_addresses(&entries)?;
    let total_weight = total_weight(&entries)?;

    if leaf_ordering == LeafOrdering::Canonical {
        sort_entries_deterministically(&mut entries);
    }
    let leaves: Vec<B256> = entries.iter().map(LedgerEntry::hash).collect();
    let merkle_tree = MerkleTree::new(&leaves)?;

    let commitment = LedgerCommitment {
        merkle_root: merkle_tree.get_root(),
        total_weight,
        leaf_count: merkle_tree.leaf_count(),
    };
    info!(
        "Built tree of {} leaves (depth {}, {leaf_ordering:?} ordering), root: {}, total: {}",
        commitment.leaf_count,
        merkle_tree.depth(),
        commitment.merkle_root_hex(),
        commitment.total_weight
    );
    Ok(commitment)
}

/// Builds the merkle root and total weight of a raw `address -> weight` ledger.
pub fn build_ledger_commitment(
    ledger: &[(String, RawWeight)],
    leaf_ordering: LeafOrdering,
) -> Result<LedgerCommitment, LedgerError> {
    if ledger.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }
    let entries = parse_ledger(ledger)?;
    build_commitment_from_entries(entries, leaf_ordering)
}
