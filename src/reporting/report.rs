//! Report rendering and display logic for refscan

use std::path::Path;

use crate::core::constants::{display, pattern};
use crate::core::types::ScanResults;

/// The banner printed before every scan: what is searched for, and the
/// expected form, followed by a blank line.
pub fn render_preamble() -> String {
    format!(
        "{} Searching for misleading '{}' references...\n    (Should be '{}{}' for Claude Code Web UI)\n\n",
        display::SEARCH_EMOJI,
        pattern::TARGET_PREFIX,
        pattern::TARGET_PREFIX,
        pattern::EXPECTED_SUBPATH,
    )
}

/// Render the aggregate results as the final human-readable report.
///
/// An empty result set renders as a single success acknowledgment. Otherwise
/// the report lists each file in lexicographic path order with its matches,
/// then a separator, a summary with total match and file counts, and the
/// fixed remediation hint.
pub fn render_report(results: &ScanResults) -> String {
    if results.is_empty() {
        return format!(
            "{} No misleading '{}' references found!\n",
            display::SUCCESS_EMOJI,
            pattern::TARGET_PREFIX,
        );
    }

    let mut out = format!(
        "{} Found {} file(s) with misleading references:\n\n",
        display::ERROR_EMOJI,
        results.file_count(),
    );

    for path in results.sorted_paths() {
        out.push_str(&format!("{} {}\n", display::FILE_EMOJI, path.display()));
        if let Some(matches) = results.matches_for(path) {
            for line_match in matches {
                out.push_str(&format!(
                    "   Line {:>width$}: {}\n",
                    line_match.line(),
                    line_match.text(),
                    width = display::LINE_NUMBER_WIDTH,
                ));
            }
        }
        out.push('\n');
    }

    out.push_str(&display::SEPARATOR_CHAR.repeat(display::SEPARATOR_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{} Summary: {} match(es) in {} file(s)\n\n",
        display::SUMMARY_EMOJI,
        results.total_matches(),
        results.file_count(),
    ));
    out.push_str(&format!(
        "{} Recommendation:\n   Replace 'https://{}' with '{}'\n   for Claude Code Web UI references\n",
        display::HINT_EMOJI,
        pattern::TARGET_PREFIX,
        pattern::RECOMMENDED_URL,
    ));

    out
}

/// Print the preamble to stdout.
pub fn print_preamble() {
    print!("{}", render_preamble());
}

/// Print the final report to stdout.
pub fn print_report(results: &ScanResults) {
    print!("{}", render_report(results));
}

/// Report a per-file read failure on stdout, the operator-facing channel.
/// The scan continues; the file simply contributes zero matches.
pub fn warn_read_failure(path: &Path, err: &std::io::Error) {
    println!(
        "{}  Error reading {}: {}",
        display::WARNING_EMOJI,
        path.display(),
        err,
    );
}
