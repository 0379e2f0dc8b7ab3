use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ridgewave multi-scale peak analysis.
#[derive(Parser)]
#[command(
    name = "ridgewave",
    version,
    about = "Continuous wavelet transform and ridge ranking for chromatographic signals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Transform a signal across scales and reconstruct it.
    Transform(TransformArgs),
    /// Score configured ridges and sort them ascending by feature priority.
    Rank(RankArgs),
}

/// Arguments for the `transform` subcommand.
#[derive(clap::Args)]
pub struct TransformArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ridgewave.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config. Stdout when neither is set.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the synthetic signal's noise seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Include every coefficient image and the reconstruction in the output.
    #[arg(long)]
    pub coefficients: bool,
}

/// Arguments for the `rank` subcommand.
#[derive(clap::Args)]
pub struct RankArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ridgewave.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config. Stdout when neither is set.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
