use crate::ledger_commitment::{build_ledger_commitment, LeafOrdering, LedgerCommitment};
use alloy_primitives::{B256, U256};
use merkle_tree::serde_serialize::{option_u256_number_or_string, ordered_map_conversion};
use merkle_tree::{LedgerError, RawWeight};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ledger config file: shares per address plus the commitment generated from them.
///
/// Only the ledger is read. `totalShares` and `merkleRoot` are outputs, whatever the file
/// holds for them is ignored on load and replaced by [`LedgerConfig::with_commitment`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerConfig {
    /// address -> shares, in the order of the config file
    #[serde(default, with = "ordered_map_conversion")]
    pub ledger: Vec<(String, RawWeight)>,
    #[serde(
        skip_deserializing,
        skip_serializing_if = "Option::is_none",
        serialize_with = "option_u256_number_or_string::serialize"
    )]
    pub total_shares: Option<U256>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub merkle_root: Option<B256>,
}

impl LedgerConfig {
    /// Ledger configs are looked up by name as `<config_dir>/<name>.json`.
    pub fn config_path<P: AsRef<Path>>(config_dir: P, name: &str) -> PathBuf {
        config_dir.as_ref().join(format!("{name}.json"))
    }

    pub fn commit(&self, leaf_ordering: LeafOrdering) -> Result<LedgerCommitment, LedgerError> {
        build_ledger_commitment(&self.ledger, leaf_ordering)
    }

    /// The same ledger with total shares and merkle root replaced by the commitment values.
    pub fn with_commitment(self, commitment: &LedgerCommitment) -> Self {
        LedgerConfig {
            total_shares: Some(commitment.total_weight),
            merkle_root: Some(commitment.merkle_root),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{read_from_json_file, write_to_json_file};
    use serde_json::json;
    use std::str::FromStr;

    const ROOT_ABC: &str = "0xae79d3e5107a06839a49af7c70dd10248d8ae82b98f1b2acf06a8cb7f2a10f74";

    const CONFIG_JSON: &str = r#"{
    "ledger": {
        "0xccccccccccccccccccccccccccccccccccccccc3": 30,
        "0xAaAAAaaAAAAAAaaAAAaaaaAaAaAAAAaAAaAaAaA1": "10",
        "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2": 20
    },
    "description": "dropped on write"
}"#;

    #[test]
    fn test_config_path() {
        assert_eq!(
            LedgerConfig::config_path("/shrines", "genesis"),
            PathBuf::from("/shrines/genesis.json")
        );
    }

    #[test]
    fn test_missing_ledger_defaults_to_empty() {
        let config: LedgerConfig = serde_json::from_value(json!({})).unwrap();
        assert!(config.ledger.is_empty());
        assert_eq!(config.total_shares, None);
        assert_eq!(config.merkle_root, None);
        assert_eq!(
            config.commit(LeafOrdering::Canonical),
            Err(LedgerError::EmptyLedger)
        );
    }

    #[test]
    fn test_commit_and_write_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = LedgerConfig::config_path(dir.path(), "shrine");
        std::fs::write(&path, CONFIG_JSON).unwrap();

        let config: LedgerConfig = read_from_json_file(&path).unwrap();
        let commitment = config.commit(LeafOrdering::Canonical).unwrap();
        assert_eq!(commitment.merkle_root_hex(), ROOT_ABC);
        write_to_json_file(&config.clone().with_commitment(&commitment), &path).unwrap();

        let written: serde_json::Value = read_from_json_file(&path).unwrap();
        assert_eq!(written["totalShares"], json!(60));
        assert_eq!(written["merkleRoot"], json!(ROOT_ABC));
        assert!(written.get("description").is_none());

        let reloaded: LedgerConfig = read_from_json_file(&path).unwrap();
        assert_eq!(reloaded.ledger, config.ledger);
        // a second run over its own output yields the same commitment
        assert_eq!(reloaded.commit(LeafOrdering::Canonical).unwrap(), commitment);
        let rewritten = reloaded.with_commitment(&commitment);
        assert_eq!(rewritten.total_shares, Some(U256::from(60)));
        assert_eq!(rewritten.merkle_root, Some(B256::from_str(ROOT_ABC).unwrap()));
    }

    #[test]
    fn test_stale_commitment_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = LedgerConfig::config_path(dir.path(), "stale");
        let stale = json!({
            "ledger": {
                "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1": 10,
                "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2": 20,
                "0xccccccccccccccccccccccccccccccccccccccc3": 30
            },
            "totalShares": 12.5,
            "merkleRoot": ""
        });
        write_to_json_file(&stale, &path).unwrap();

        let config: LedgerConfig = read_from_json_file(&path).unwrap();
        assert_eq!(config.total_shares, None);
        assert_eq!(config.merkle_root, None);
        let commitment = config.commit(LeafOrdering::Canonical).unwrap();
        write_to_json_file(&config.with_commitment(&commitment), &path).unwrap();

        let written: serde_json::Value = read_from_json_file(&path).unwrap();
        assert_eq!(written["totalShares"], json!(60));
        assert_eq!(written["merkleRoot"], json!(ROOT_ABC));

        for placeholder in [json!("TBD"), json!(""), json!(-1), json!(null), json!({})] {
            let config: LedgerConfig = serde_json::from_value(json!({
                "ledger": {"0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1": 10},
                "totalShares": placeholder.clone(),
                "merkleRoot": placeholder
            }))
            .unwrap();
            assert_eq!(config.ledger.len(), 1);
        }
    }

    #[test]
    fn test_write_keeps_ledger_key_order() {
        let config: LedgerConfig = serde_json::from_str(CONFIG_JSON).unwrap();
        let text = serde_json::to_string(&config).unwrap();
        let c = text.find("cccc").unwrap();
        let a = text.find("AaAA").unwrap();
        let b = text.find("bbbb").unwrap();
        assert!(c < a && a < b, "{text}");
    }
}
