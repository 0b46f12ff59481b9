//! Aggregation of parsed samples into per-process and global views.
//!
//! This module transforms per-file flag counts into:
//! - One merged mapping per process (merge-by-maximum)
//! - The global set of distinct flag configurations

pub mod global;
pub mod process;

// Re-export main types and functions
pub use global::GlobalFlagSet;
pub use process::{merge_max, ProcessAggregate};
