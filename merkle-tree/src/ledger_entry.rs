use crate::address::normalize_address;
use crate::error::LedgerError;
use crate::weight::RawWeight;
use alloy_primitives::{keccak256, Address, B256, U256};

const ADDRESS_LEN: usize = 20;
const LEAF_PAYLOAD_LEN: usize = ADDRESS_LEN + 32;

/// One validated ledger record, the source of one merkle tree leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    pub address: Address,
    pub weight: U256,
}

impl LedgerEntry {
    pub fn new(address: Address, weight: U256) -> Self {
        LedgerEntry { address, weight }
    }

    /// Validates a raw `address -> weight` pair taken from a ledger config.
    pub fn parse(raw_address: &str, raw_weight: &RawWeight) -> Result<Self, LedgerError> {
        let address = normalize_address(raw_address)?;
        let weight = raw_weight
            .to_u256()
            .map_err(|reason| LedgerError::InvalidWeight {
                address: raw_address.to_string(),
                weight: raw_weight.to_string(),
                reason,
            })?;
        Ok(LedgerEntry { address, weight })
    }

    /// Leaf hash of the entry: `keccak256(address || uint256 weight)`,
    /// the packed `(address, uint256)` encoding as Solidity's `abi.encodePacked` does it.
    pub fn hash(&self) -> B256 {
        let mut payload = [0_u8; LEAF_PAYLOAD_LEN];
        payload[..ADDRESS_LEN].copy_from_slice(self.address.as_slice());
        payload[ADDRESS_LEN..].copy_from_slice(&self.weight.to_be_bytes::<32>());
        keccak256(payload)
    }
}
