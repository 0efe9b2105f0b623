//! Reporting
//!
//! This module renders the final human-readable report and provides the
//! structured logging helpers used across the scan.

pub mod logging;
pub mod report;

// Re-export commonly used items
pub use report::{print_preamble, print_report, render_preamble, render_report};
