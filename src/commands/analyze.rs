//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Discovers sample files and groups them by PID
//! 2. Parses every sample
//! 3. Merges samples per process and unions flags globally
//! 4. Prints the report and optionally exports it

use crate::aggregator::{GlobalFlagSet, ProcessAggregate};
use crate::discovery::{discover_samples, ProcessSamples};
use crate::output::{global_export_path, global_flags_table, process_table, render_text, write_csv};
use crate::parser::{read_sample_or_empty, FlagCounts};
use crate::utils::error::SampleReadError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Directory holding `pte_stats_pid*` files
    pub input_dir: PathBuf,

    /// Per-process CSV export; the global table goes next to it
    pub csv: Option<PathBuf>,
}

/// Result of one completed pass
#[derive(Debug)]
pub struct AnalysisReport {
    /// Ascending by PID
    pub processes: Vec<ProcessAggregate>,
    pub global: GlobalFlagSet,
    pub sample_files: usize,
    pub read_errors: Vec<SampleReadError>,
}

/// How a run ended
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Directory exists but contains no sample files
    NoSampleFiles,
    Completed(AnalysisReport),
}

/// Validate analyze arguments
///
/// Only checks things that don't touch the filesystem; a missing directory
/// is reported by discovery.
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input_dir.as_os_str().is_empty() {
        anyhow::bail!("Input directory cannot be empty");
    }

    if let Some(csv) = &args.csv {
        if csv.as_os_str().is_empty() {
            anyhow::bail!("CSV path cannot be empty");
        }
    }

    Ok(())
}

/// Parse and aggregate every discovered sample.
///
/// **Public** - the whole aggregation pass, without any printing of results
pub fn build_report(grouped: &ProcessSamples) -> AnalysisReport {
    let mut processes = Vec::with_capacity(grouped.len());
    let mut read_errors = Vec::new();
    let mut sample_files = 0;

    for (&pid, samples) in grouped {
        let parsed: Vec<FlagCounts> = samples
            .iter()
            .map(|sample| {
                let (counts, err) = read_sample_or_empty(sample);
                read_errors.extend(err);
                counts
            })
            .collect();
        sample_files += samples.len();
        processes.push(ProcessAggregate::from_samples(pid, &parsed));
    }

    // Only after every process is known
    let global = GlobalFlagSet::from_processes(&processes);

    AnalysisReport {
        processes,
        global,
        sample_files,
        read_errors,
    }
}

/// Format the console report
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("\n=== Analysis Results ===\n");
    out.push_str(&format!(
        "Total Unique Combinations (Global across all processes): {}\n",
        report.global.len()
    ));
    out.push_str("\n--- Per-Process Breakdown ---\n");
    out.push_str(&render_text(&process_table(&report.processes)));
    out.push('\n');

    if !report.global.is_empty() {
        out.push_str("\n--- Global Unique Combinations Detail ---\n");
        out.push_str(&render_text(&global_flags_table(&report.global)));
        out.push('\n');
    }

    if !report.read_errors.is_empty() {
        out.push_str(&format!(
            "\n{} sample file(s) could not be read and were skipped\n",
            report.read_errors.len()
        ));
    }

    out
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input directory missing or unreadable
/// * Export files cannot be written
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<AnalysisOutcome> {
    info!("Step 1/4: Discovering sample files in {}", args.input_dir.display());
    let grouped = discover_samples(&args.input_dir)?;

    if grouped.is_empty() {
        println!("No pte_stats files found in {}", args.input_dir.display());
        return Ok(AnalysisOutcome::NoSampleFiles);
    }

    let file_count: usize = grouped.values().map(Vec::len).sum();
    println!("Found {} files to analyze...", file_count);
    println!("Identified {} unique processes.", grouped.len());

    info!("Step 2/4: Parsing and merging samples...");
    let report = build_report(&grouped);
    debug!(
        "{} processes, {} global configurations, {} unreadable files",
        report.processes.len(),
        report.global.len(),
        report.read_errors.len()
    );

    info!("Step 3/4: Rendering report...");
    print!("{}", render_report(&report));

    if let Some(csv) = &args.csv {
        info!("Step 4/4: Exporting tables...");
        export_report(&report, csv)?;
    } else {
        info!("Step 4/4: Skipping export (not requested)");
    }

    Ok(AnalysisOutcome::Completed(report))
}

/// Write both tables next to each other
///
/// **Private** - internal helper for execute_analyze
fn export_report(report: &AnalysisReport, csv: &Path) -> Result<()> {
    println!("\nSaving results to {}...", csv.display());
    write_csv(&process_table(&report.processes), csv)
        .with_context(|| format!("Failed to write {}", csv.display()))?;

    let global_csv = global_export_path(csv);
    println!("Saving global flag details to {}...", global_csv.display());
    write_csv(&global_flags_table(&report.global), &global_csv)
        .with_context(|| format!("Failed to write {}", global_csv.display()))?;

    println!("Done.");
    Ok(())
}
