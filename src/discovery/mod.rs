//! Locating per-process sample files on disk.
//!
//! The kernel facility writes one file per snapshot, named
//! `pte_stats_pid<PID>_<SAMPLE>.txt`. This module finds those files
//! and groups them by process.

pub mod scanner;

pub use scanner::{discover_samples, parse_sample_file_name, ProcessSamples, SampleFile};
