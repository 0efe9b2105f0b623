//! refscan finds misleading `claude.ai/` references in documentation trees.
//!
//! A reference is misleading when the literal `claude.ai/` is not immediately
//! followed by `code/`, optionally prefixed by an `http://` or `https://`
//! scheme. The scan walks a directory tree (pruning a fixed skip-set of
//! vendored/generated directories), reads the text-like files it finds, and
//! aggregates matching lines per file for a deterministic report.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let results = refscan::scan_tree(Path::new(".")).unwrap();
//! refscan::reporting::print_report(&results);
//! ```

pub mod core;
pub mod discovery;
pub mod reporting;
pub mod scanning;

// Re-export the crate surface most callers need
pub use crate::core::{LineMatch, RefScanError, Result, ScanResults};
pub use crate::scanning::{ScanFile, Scanner};

use std::path::Path;

use crate::reporting::{logging, report};

/// Walk `root`, scan every accepted file, and accumulate the matches.
///
/// Per-file read failures are recovered locally: a warning goes to stdout,
/// the file contributes zero matches, and the scan continues. Walker-level
/// failures (e.g. an unreadable directory) abort the run instead.
pub fn scan_tree(root: &Path) -> Result<ScanResults> {
    let scanner = Scanner::default();
    let mut results = ScanResults::new();

    for entry in discovery::walk_tree(root) {
        let entry = entry?;

        let path = entry.path();
        // A symlink to a regular file is scanned; directories and broken
        // links are rejected. The walker does not descend symlinked dirs.
        if !path.is_file() {
            continue;
        }
        if !discovery::is_text_candidate(path) {
            continue;
        }

        match scanner.scan_file(path) {
            Ok(matches) => {
                logging::log_file_matches(path, matches.len());
                // Report paths relative to the root; recording nothing for
                // clean files keeps the file-appears-iff-matched invariant.
                let rel = path.strip_prefix(root).unwrap_or(path);
                results.record(rel, matches);
            }
            Err(err) => {
                logging::log_read_failure(path, &err);
                report::warn_read_failure(path, &err);
            }
        }
    }

    logging::log_scan_complete(&results);
    Ok(results)
}
