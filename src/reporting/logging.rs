use std::path::Path;

use log::{debug, info, warn};

use crate::core::types::ScanResults;

/// Initialize the logger from the default environment.
///
/// Logging is diagnostic-only; the report itself goes to stdout unlogged.
/// `try_init` is used so repeated initialization (e.g. in tests) is harmless.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();
}

/// Log where the scan starts.
pub fn log_scan_start(root: &Path) {
    info!("Scanning for misleading references under {}", root.display());
}

/// Log the per-file outcome for debugging.
pub fn log_file_matches(path: &Path, match_count: usize) {
    debug!("{}: {match_count} match(es)", path.display());
}

/// Log a recovered per-file read failure.
pub fn log_read_failure(path: &Path, err: &std::io::Error) {
    warn!("Failed to read {}: {err}", path.display());
}

/// Log the aggregate outcome of a completed scan.
pub fn log_scan_complete(results: &ScanResults) {
    info!(
        "Scan complete: {} match(es) in {} file(s)",
        results.total_matches(),
        results.file_count()
    );
}
