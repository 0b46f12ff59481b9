//! Delimited export of tables.

use super::table::Table;
use crate::utils::config::{CSV_DELIMITER, GLOBAL_EXPORT_SUFFIX};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Render a table as CSV: header row first, one line per row.
///
/// Cells are quoted only when they contain the delimiter, a quote or a newline.
pub fn render_csv(table: &Table) -> String {
    let mut out = String::new();
    push_record(&mut out, table.headers.iter().cloned());
    for row in &table.rows {
        push_record(&mut out, row.iter().map(ToString::to_string));
    }
    out
}

fn push_record(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(CSV_DELIMITER);
        }
        first = false;
        out.push_str(&escape_field(&field));
    }
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains([CSV_DELIMITER, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write a table to a CSV file
///
/// **Public** - main entry point for export
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_csv(table: &Table, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} rows to: {}", table.len(), output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_csv(table).as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Check that a path can be used as an output file
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Derive the global-table export path from the per-process one.
///
/// `out.csv` -> `out_global_flags.csv`, `out` -> `out_global_flags`.
pub fn global_export_path(csv_path: &Path) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match csv_path.extension() {
        Some(ext) => format!("{}{}.{}", stem, GLOBAL_EXPORT_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, GLOBAL_EXPORT_SUFFIX),
    };
    csv_path.with_file_name(file_name)
}
