//! Asset generator
//!
//! Writes every sprite, tile and icon the game loads into one directory.
//!
//! Usage:
//!   cargo run --bin generate                          # use config/asset_generator.toml
//!   cargo run --bin generate -- --output-dir out      # write somewhere else
//!   cargo run --bin generate -- --seed 42 --quiet     # reproducible, summary only

use anyhow::Context as _;
use clap::Parser;
use housegen::runner::{list_output_dir, print_summary};
use housegen::{BatchRunner, Catalog, GeneratorConfig};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "generate", version, about = "Generate pixel-art game assets")]
struct Cli {
    /// Directory to write PNGs into (overrides the config file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Seed for the cosmetic randomness in wood grain, wall noise and book colors
    #[arg(long)]
    seed: Option<u64>,

    /// Read this TOML file instead of config/asset_generator.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the summary
    #[arg(long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig::resolve(cli.config.as_deref(), cli.output_dir, cli.seed, cli.quiet)?;

    println!("=== Art Asset Generator ===");
    let catalog = Catalog::standard()?;
    let report = BatchRunner::new(&config)
        .run(&catalog)
        .with_context(|| format!("generating assets into {}", config.output_dir.display()))?;

    let listing = list_output_dir(&report.output_dir)?;
    print_summary(&report, &listing);
    Ok(())
}
