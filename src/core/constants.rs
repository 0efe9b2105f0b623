/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the fixed skip-set, extension allow-list, scan
/// pattern, and display values so they live in one place instead of being
/// scattered across the pipeline.
/// Directory traversal constants
pub mod traversal {
    /// Path segments pruned entirely from traversal.
    ///
    /// Entries are compared literally against a single path segment. The
    /// `*.egg-info` entry is a literal string, not a glob, so it only matches
    /// a segment that is exactly `*.egg-info`.
    pub const SKIP_SEGMENTS: [&str; 10] = [
        ".git",
        "__pycache__",
        "node_modules",
        ".venv",
        "venv",
        ".pytest_cache",
        ".mypy_cache",
        "build",
        "dist",
        "*.egg-info",
    ];
}

/// File selection constants
pub mod files {
    /// Extensions (without the leading dot) eligible for scanning.
    pub const TEXT_EXTENSIONS: [&str; 13] = [
        "md", "txt", "py", "sh", "yaml", "yml", "json", "toml", "rst", "html", "xml", "cfg", "ini",
    ];

    /// Extensionless file names scanned regardless of the allow-list.
    /// Comparison is case-sensitive.
    pub const BARE_NAMES: [&str; 2] = ["LICENSE", "README"];
}

/// Scan pattern constants
pub mod pattern {
    /// The host/path prefix every misleading reference starts with.
    pub const TARGET_PREFIX: &str = "claude.ai/";

    /// The subpath that makes a reference acceptable.
    pub const EXPECTED_SUBPATH: &str = "code/";

    /// Line-level candidate pattern fed to the grep matcher. The scheme is
    /// optional; the not-followed-by-`code/` condition cannot be expressed
    /// here and is checked per occurrence instead.
    pub const CANDIDATE_LINE_PATTERN: &str = r"(https?://)?claude\.ai/";

    /// Per-occurrence pattern used when deciding whether a candidate line
    /// actually contains a misleading reference.
    pub const OCCURRENCE_PATTERN: &str = r"claude\.ai/";

    /// The replacement recommended in the report.
    pub const RECOMMENDED_URL: &str = "https://claude.ai/code/";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for the search banner
    pub const SEARCH_EMOJI: &str = "🔍";
    /// Emoji for success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for error status
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for warning status
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for file entries
    pub const FILE_EMOJI: &str = "📄";
    /// Emoji for the summary line
    pub const SUMMARY_EMOJI: &str = "📊";
    /// Emoji for the remediation hint
    pub const HINT_EMOJI: &str = "💡";

    /// Right-aligned width of line numbers in the report
    pub const LINE_NUMBER_WIDTH: usize = 4;
    /// Width of the separator rule before the summary
    pub const SEPARATOR_WIDTH: usize = 80;
    /// Character the separator rule is built from
    pub const SEPARATOR_CHAR: &str = "━";
}
