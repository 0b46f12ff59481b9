//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;

// Re-export main command functions
pub use analyze::{
    build_report, execute_analyze, render_report, validate_args, AnalysisOutcome, AnalysisReport,
    AnalyzeArgs,
};
