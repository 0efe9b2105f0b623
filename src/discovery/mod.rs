//! File discovery
//!
//! This module handles directory traversal with the fixed skip-set and
//! the extension/name allow-list that decides which files get scanned.

pub mod filter;
pub mod walker;

// Re-export commonly used items
pub use filter::is_text_candidate;
pub use walker::{is_skipped_segment, walk_tree};
