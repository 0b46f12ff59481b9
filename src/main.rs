//! PTE Stats Analyzer CLI
//!
//! Summarizes per-process and global PTE flag configurations from a
//! directory of `pte_stats_pid<PID>_<SAMPLE>.txt` dumps.
//!
//! Exit status: 0 when the analysis completes or no sample files are found,
//! 1 when the input directory is missing or an export cannot be written.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use pte_stats_analyzer::commands::{execute_analyze, validate_args, AnalyzeArgs};

/// Analyze PTE stats from a results directory
#[derive(Parser, Debug)]
#[command(name = "pte-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing pte_stats_pid* files
    input_dir: PathBuf,

    /// Output results to a CSV file (global flags go to <name>_global_flags.<ext>)
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = AnalyzeArgs {
        input_dir: cli.input_dir,
        csv: cli.csv,
    };

    validate_args(&args)?;
    execute_analyze(&args)?;

    Ok(())
}
