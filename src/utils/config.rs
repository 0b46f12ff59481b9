//! Configuration and constants for the CLI.

/// Prefix shared by every sample file the kernel facility writes
pub const SAMPLE_FILE_PREFIX: &str = "pte_stats_pid";

/// Extension of sample files
pub const SAMPLE_FILE_EXTENSION: &str = "txt";

/// Suffix inserted before the extension of the `--csv` path for the global table
pub const GLOBAL_EXPORT_SUFFIX: &str = "_global_flags";

/// Field delimiter for exported tables
pub const CSV_DELIMITER: char = ',';

/// Gap between columns in console tables
pub const COLUMN_GAP: &str = "  ";

// Column headers, in export order
pub const PROCESS_COLUMNS: &[&str] = &[
    "PID",
    "Unique_Configurations",
    "Total_Events",
    "Sample_Files_Count",
];
pub const HEX_COLUMN: &str = "Hex";
