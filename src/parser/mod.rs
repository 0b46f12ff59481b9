//! Sample file parsing.
//!
//! This module handles:
//! - Matching `Flags: 0x<hex> Count: <decimal>` records
//! - Reading one sample file into a bitmask -> count mapping
//! - Tolerating non-record lines (headers, comments, blanks)

pub mod pte_stats;
pub mod schema;

// Re-export main types
pub use pte_stats::{parse_line, parse_sample, parse_sample_file, read_sample_or_empty};
pub use schema::FlagCounts;
