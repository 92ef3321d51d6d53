use alloy_primitives::Address;
use thiserror::Error;

/// Errors of a single ledger commitment build. None of them is recoverable,
/// the ledger input has to be fixed by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress {
        address: String,
        reason: &'static str,
    },

    #[error("Invalid weight {weight} for address '{address}': {reason}")]
    InvalidWeight {
        address: String,
        weight: String,
        reason: &'static str,
    },

    #[error("Ledger has no entries")]
    EmptyLedger,

    #[error("Ledger total weight is zero")]
    TotalWeightZero,

    /// Two ledger keys normalize to the same address (e.g. differ only in casing)
    #[error("Duplicate ledger address {address}")]
    DuplicateAddress { address: Address },

    #[error("Ledger total weight does not fit into uint256")]
    TotalWeightOverflow,
}
