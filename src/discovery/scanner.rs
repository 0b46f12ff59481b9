//! Directory scanning and file-name decoding.

use crate::utils::config::{SAMPLE_FILE_EXTENSION, SAMPLE_FILE_PREFIX};
use crate::utils::error::DiscoveryError;
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `pte_stats_pid<pid>_<sample>.txt`, anchored on both ends
static SAMPLE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^{}([0-9]+)_([0-9]+)\.{}$",
        regex::escape(SAMPLE_FILE_PREFIX),
        regex::escape(SAMPLE_FILE_EXTENSION)
    );
    Regex::new(&pattern).expect("Invalid sample file name regex")
});

/// One snapshot file for a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFile {
    pub pid: u64,

    /// Advisory only; merging does not depend on it
    pub sample_index: u64,

    pub path: PathBuf,
}

/// Sample files grouped by PID, ascending
pub type ProcessSamples = BTreeMap<u64, Vec<SampleFile>>;

/// Decode `(pid, sample_index)` from a file name.
///
/// Returns `None` for names that do not follow the convention, including
/// names whose numbers do not fit in a `u64`.
pub fn parse_sample_file_name(file_name: &str) -> Option<(u64, u64)> {
    let caps = SAMPLE_NAME_RE.captures(file_name)?;
    let pid = caps[1].parse().ok()?;
    let sample_index = caps[2].parse().ok()?;
    Some((pid, sample_index))
}

/// Find all sample files in `input_dir` and group them by PID.
///
/// **Public** - first stage of the analyze pipeline
///
/// Non-matching entries are ignored. An empty map means the directory
/// exists but holds no sample files.
///
/// # Errors
/// * `DiscoveryError::DirectoryNotFound` - `input_dir` does not exist
/// * `DiscoveryError::NotADirectory` - `input_dir` is a regular file
/// * `DiscoveryError::ReadDirFailed` - the directory cannot be listed
pub fn discover_samples(input_dir: impl AsRef<Path>) -> Result<ProcessSamples, DiscoveryError> {
    let input_dir = input_dir.as_ref();

    if !input_dir.exists() {
        return Err(DiscoveryError::DirectoryNotFound(input_dir.to_path_buf()));
    }
    if !input_dir.is_dir() {
        return Err(DiscoveryError::NotADirectory(input_dir.to_path_buf()));
    }

    let mut grouped = ProcessSamples::new();

    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        match parse_sample_file_name(name) {
            Some((pid, sample_index)) => {
                grouped.entry(pid).or_default().push(SampleFile {
                    pid,
                    sample_index,
                    path: entry.path(),
                });
            }
            None => debug!("Ignoring {}", name),
        }
    }

    for samples in grouped.values_mut() {
        samples.sort_by_key(|s| s.sample_index);
    }

    debug!(
        "Discovered {} sample files across {} processes",
        grouped.values().map(Vec::len).sum::<usize>(),
        grouped.len()
    );

    Ok(grouped)
}
