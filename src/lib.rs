//! PTE Stats Analyzer
//!
//! Aggregation and decoding of page-table-entry flag statistics emitted by
//! kernel instrumentation, one text file per sampled process snapshot.
//!
//! This crate provides the core implementation for the `pte-stats` CLI tool.
//!
//! ## Pipeline
//!
//! discovery -> parser -> per-process aggregate -> report,
//! with the global flag set and decoder feeding the global report.
//!
//! ```bash
//! pte-stats ./results --csv summary.csv
//! ```

pub mod aggregator;
pub mod commands;
pub mod decoder;
pub mod discovery;
pub mod output;
pub mod parser;
pub mod utils;
