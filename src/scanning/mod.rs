//! Line scanning
//!
//! This module reads accepted files line by line and detects misleading
//! reference occurrences.

pub mod scanner;

// Re-export commonly used items
pub use scanner::{ScanFile, Scanner};
