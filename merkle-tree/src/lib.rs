pub mod address;
pub mod error;
pub mod ledger_entry;
pub mod merkle_tree;
pub mod serde_serialize;
pub mod weight;

pub use error::LedgerError;
pub use ledger_entry::LedgerEntry;
pub use merkle_tree::MerkleTree;
pub use weight::RawWeight;
