//! Output writers for analysis results.
//!
//! This module handles:
//! - The in-memory table model shared by all renderers
//! - Aligned text tables for the console
//! - CSV export files

pub mod csv;
pub mod report;
pub mod table;
pub mod text;

// Re-export main functions
pub use csv::{global_export_path, render_csv, validate_path, write_csv};
pub use report::{global_flags_table, process_table, rank_processes};
pub use table::{Cell, Table};
pub use text::render_text;
