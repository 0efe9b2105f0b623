use std::fmt;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

/// Represents a single misleading reference found in a file.
///
/// Tracks the exact line number and the line's text (trailing whitespace
/// stripped) for reporting purposes. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Line number where the reference was found (1-indexed)
    line: u64,
    /// The matching line, with trailing whitespace removed
    text: String,
}

/// Errors that can occur when building a `LineMatch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatchError {
    /// Line number is invalid (zero)
    InvalidLineNumber,
}

impl fmt::Display for LineMatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLineNumber => write!(f, "Line number must be greater than 0"),
        }
    }
}

impl std::error::Error for LineMatchError {}

impl LineMatch {
    /// Create a new LineMatch with validation.
    ///
    /// # Arguments
    /// * `line` - Line number where the reference was found (must be > 0)
    /// * `text` - The matching line; trailing whitespace is stripped here
    pub fn new<S: Into<String>>(line: u64, text: S) -> Result<Self, LineMatchError> {
        if line == 0 {
            return Err(LineMatchError::InvalidLineNumber);
        }

        Ok(Self {
            line,
            text: text.into().trim_end().to_string(),
        })
    }

    /// Get the 1-based line number.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Get the trimmed line text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Accumulated scan results, keyed by file path relative to the scan root.
///
/// A file appears here if and only if it produced at least one match; the
/// per-file match order is the top-to-bottom scan order. Keys carry no
/// ordering during construction and are sorted only at report time.
#[derive(Debug, Default)]
pub struct ScanResults {
    files: FxHashMap<PathBuf, Vec<LineMatch>>,
}

impl ScanResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the matches found in one file. Recording an empty match list
    /// is a no-op, which keeps the file-appears-iff-matched invariant.
    pub fn record<P: Into<PathBuf>>(&mut self, path: P, matches: Vec<LineMatch>) {
        if matches.is_empty() {
            return;
        }
        self.files.insert(path.into(), matches);
    }

    /// Whether no file produced a match.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files with at least one match.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of matches across all files.
    pub fn total_matches(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Matches recorded for one file, in scan order.
    pub fn matches_for(&self, path: &Path) -> Option<&[LineMatch]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// File paths in lexicographic order, for deterministic reporting.
    pub fn sorted_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.files.keys().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }
}
