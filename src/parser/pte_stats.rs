//! Parser for the kernel's `pte_stats` text dumps.
//!
//! Each record is a single line of the form
//! `Flags: 0x<hex> Count: <decimal>`. Anything else on a line is noise and
//! is skipped without complaint.

use super::schema::FlagCounts;
use crate::discovery::SampleFile;
use crate::utils::error::SampleReadError;
use log::{debug, warn};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Kernel output: "Flags: 0x%lx Count: %ld"
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Flags:\s*0x([0-9a-f]+)\s+Count:\s*([0-9]+)").expect("Invalid record regex")
});

/// Match one line against the record shape.
///
/// Returns `None` for blank or non-record lines, and for values that do not
/// fit in 64 bits.
pub fn parse_line(line: &str) -> Option<(u64, u64)> {
    let caps = RECORD_RE.captures(line)?;
    let flags = u64::from_str_radix(&caps[1], 16).ok()?;
    let count = caps[2].parse().ok()?;
    Some((flags, count))
}

/// Parse the full text of a sample.
///
/// **Public** - pure entry point, no I/O
///
/// A bitmask repeated within the same sample keeps its last count.
pub fn parse_sample(content: &str) -> FlagCounts {
    let mut counts = FlagCounts::new();

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some((flags, count)) => {
                counts.insert(flags, count);
            }
            None => debug!("Skipping line {}: {:?}", lineno + 1, line),
        }
    }

    counts
}

/// Read and parse one sample file.
///
/// # Errors
/// * `SampleReadError` - the file could not be read (missing, permissions,
///   invalid UTF-8)
pub fn parse_sample_file(path: impl AsRef<Path>) -> Result<FlagCounts, SampleReadError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| SampleReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let counts = parse_sample(&content);
    debug!("{}: {} flag records", path.display(), counts.len());

    Ok(counts)
}

/// Parse a discovered sample, degrading read failures to an empty mapping.
///
/// **Public** - used by the analyze pipeline
///
/// The failure is reported on stderr and handed back so the caller can
/// account for it; it never aborts the run.
pub fn read_sample_or_empty(sample: &SampleFile) -> (FlagCounts, Option<SampleReadError>) {
    match parse_sample_file(&sample.path) {
        Ok(counts) => (counts, None),
        Err(e) => {
            warn!("Sample for PID {} contributes nothing", sample.pid);
            eprintln!("{}", e);
            (FlagCounts::new(), Some(e))
        }
    }
}
