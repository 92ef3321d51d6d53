use env_logger::{Builder, Env};
use ledger_distribution::ledger_generator::{generate_ledger_commitment, GeneratorConfig};
use ledger_distribution::{LeafOrdering, LedgerConfig};
use std::path::PathBuf;
use {clap::Parser, log::info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate the merkle root and total shares of a ledger config"
)]
struct Args {
    /// Name of the ledger config, loaded from `<config-dir>/<name>.json`
    #[arg(env = "LEDGER_NAME")]
    name: String,

    /// Directory holding the ledger configs
    #[arg(long, env, default_value = ".")]
    config_dir: PathBuf,

    /// Where to save the config with the generated root, overwrites the loaded config when not set
    #[arg(long, env)]
    output_config: Option<PathBuf>,

    /// Order in which ledger entries become merkle tree leaves
    #[arg(long, env, value_enum, default_value_t = LeafOrdering::Canonical)]
    leaf_ordering: LeafOrdering,

    /// Only log the generated root and total shares, nothing is written
    #[arg(long, env)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.init();

    let args: Args = Args::parse();
    info!("Generating merkle root of ledger {}", args.name);

    let config_path = LedgerConfig::config_path(&args.config_dir, &args.name);
    let config = GeneratorConfig {
        output_config: args.output_config,
        leaf_ordering: args.leaf_ordering,
        dry_run: args.dry_run,
    };
    generate_ledger_commitment(&config_path, &config)?;

    Ok(())
}
