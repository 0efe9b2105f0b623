use std::path::PathBuf;

use refscan::core::{RefScanError, Result};
use refscan::reporting::logging;
use refscan::reporting::{print_preamble, print_report};

fn main() {
    logging::init_logger();

    match run() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let root = resolve_scan_root()?;
    logging::log_scan_start(&root);

    print_preamble();

    let results = refscan::scan_tree(&root)?;
    print_report(&results);

    // Exit code stays 0 whether or not violations were found.
    Ok(())
}

/// The scan root is the directory containing the executable, not the
/// working directory the tool happens to be invoked from.
fn resolve_scan_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        RefScanError::RootResolution("executable has no parent directory".to_string())
    })
}
