use std::fmt;

/// Error types for refscan operations
#[derive(Debug)]
pub enum RefScanError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Regex compilation error
    Regex(regex::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Scan root could not be resolved
    RootResolution(String),
}

impl fmt::Display for RefScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefScanError::Io(err) => write!(f, "IO error: {err}"),
            RefScanError::Regex(err) => write!(f, "Regex error: {err}"),
            RefScanError::FileWalking(err) => write!(f, "File walking error: {err}"),
            RefScanError::RootResolution(msg) => write!(f, "Root resolution error: {msg}"),
        }
    }
}

impl std::error::Error for RefScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RefScanError::Io(err) => Some(err),
            RefScanError::Regex(err) => Some(err),
            RefScanError::FileWalking(err) => Some(err),
            RefScanError::RootResolution(_) => None,
        }
    }
}

impl From<std::io::Error> for RefScanError {
    fn from(err: std::io::Error) -> Self {
        RefScanError::Io(err)
    }
}

impl From<regex::Error> for RefScanError {
    fn from(err: regex::Error) -> Self {
        RefScanError::Regex(err)
    }
}

impl From<ignore::Error> for RefScanError {
    fn from(err: ignore::Error) -> Self {
        RefScanError::FileWalking(err)
    }
}

/// Type alias for Results using RefScanError
pub type Result<T> = std::result::Result<T, RefScanError>;
