//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating sample files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Directory {} not found.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("{} is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to list directory: {0}")]
    ReadDirFailed(#[from] std::io::Error),
}

/// A sample file that could not be read.
///
/// Recoverable: the file contributes nothing and the run continues.
#[derive(Error, Debug)]
#[error("Error reading {}: {source}", .path.display())]
pub struct SampleReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
