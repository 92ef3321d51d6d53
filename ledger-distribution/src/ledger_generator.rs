use crate::ledger_commitment::{LeafOrdering, LedgerCommitment};
use crate::ledger_config::LedgerConfig;
use crate::utils::{file_error, read_from_json_file, write_to_json_file};
use anyhow::{anyhow, bail};
use log::info;
use std::path::{Path, PathBuf};

/// Configuration for one merkle root generation run
pub struct GeneratorConfig {
    /// Where to save the config with the generated root, the loaded config when not set
    pub output_config: Option<PathBuf>,
    pub leaf_ordering: LeafOrdering,
    /// Only log the generated root and total shares, nothing is written
    pub dry_run: bool,
}

/// Loads the ledger config, builds its commitment and saves the config
/// with total shares and merkle root filled in.
pub fn generate_ledger_commitment(
    config_path: &Path,
    config: &GeneratorConfig,
) -> anyhow::Result<LedgerCommitment> {
    let config_path_display = config_path.display().to_string();
    if !config_path.is_file() {
        bail!("Missing config at {config_path_display}.");
    }

    info!("Loading ledger config {config_path_display}...");
    let ledger_config: LedgerConfig = read_from_json_file(&config_path)
        .map_err(file_error("config-dir", &config_path_display))?;
    if ledger_config.ledger.is_empty() {
        bail!("Missing .ledger in {config_path_display}");
    }

    info!(
        "Generating merkle tree of {} ledger entries with {:?} leaf ordering...",
        ledger_config.ledger.len(),
        config.leaf_ordering
    );
    let commitment = ledger_config
        .commit(config.leaf_ordering)
        .map_err(|e| anyhow!("Invalid ledger in {config_path_display}: {e}"))?;
    info!("Generated Merkle root: {}", commitment.merkle_root_hex());
    info!("Total shares: {}", commitment.total_weight);

    if config.dry_run {
        info!("Dry run, {config_path_display} is left untouched");
        return Ok(commitment);
    }

    let output_path = config.output_config.as_deref().unwrap_or(config_path);
    let output_path_display = output_path.display().to_string();
    write_to_json_file(&ledger_config.with_commitment(&commitment), &output_path)
        .map_err(file_error("output-config", &output_path_display))?;
    info!("Generated merkle tree and root saved to {output_path_display}");

    Ok(commitment)
}
