pub mod ledger_commitment;
pub mod ledger_config;
pub mod ledger_generator;
pub mod utils;

pub use ledger_commitment::{build_ledger_commitment, LeafOrdering, LedgerCommitment};
pub use ledger_config::LedgerConfig;
