use std::borrow::Cow;
use std::io;
use std::path::Path;

use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::pattern;
use crate::core::types::LineMatch;

static CANDIDATE_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(pattern::CANDIDATE_LINE_PATTERN)
        .expect("Failed to compile candidate line pattern")
});

static OCCURRENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(pattern::OCCURRENCE_PATTERN).expect("Failed to compile occurrence pattern")
});

/// The scan stage: reads one accepted file and yields its misleading lines.
pub trait ScanFile {
    fn scan_file(&self, path: &Path) -> io::Result<Vec<LineMatch>>;
}

#[derive(Default, Debug)]
pub struct Scanner {}

impl ScanFile for Scanner {
    /// Scan a file line by line for misleading references.
    ///
    /// Lines are decoded best-effort; byte sequences that are not valid
    /// UTF-8 are dropped from the reported text rather than failing the
    /// scan. Line numbers are 1-based physical positions. Open and read
    /// failures surface as `Err` for the caller to recover from.
    fn scan_file(&self, path: &Path) -> io::Result<Vec<LineMatch>> {
        let mut matches = Vec::new();

        Searcher::new().search_path(
            &*CANDIDATE_MATCHER,
            path,
            Bytes(|line_number, line| {
                let text = Self::decode_dropping_invalid(line);

                if Self::has_misleading_reference(&text) {
                    let line_match = LineMatch::new(line_number, text.as_ref())
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    matches.push(line_match);
                }
                Ok(true)
            }),
        )?;

        Ok(matches)
    }
}

impl Scanner {
    /// Whether a line contains `claude.ai/` not immediately followed by
    /// `code/`, anywhere in the line. The optional scheme prefix does not
    /// change the decision, so only the host/path occurrences are checked.
    pub fn has_misleading_reference(line: &str) -> bool {
        OCCURRENCE_RE
            .find_iter(line)
            .any(|m| !line[m.end()..].starts_with(pattern::EXPECTED_SUBPATH))
    }

    /// Decode raw line bytes, dropping byte sequences that are not valid
    /// UTF-8. Only genuinely malformed sequences are removed; a literal
    /// replacement character already present in valid input is kept.
    fn decode_dropping_invalid(bytes: &[u8]) -> Cow<'_, str> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => {
                let mut out = String::with_capacity(bytes.len());
                let mut rest = bytes;
                while !rest.is_empty() {
                    match std::str::from_utf8(rest) {
                        Ok(tail) => {
                            out.push_str(tail);
                            break;
                        }
                        Err(err) => {
                            let valid = err.valid_up_to();
                            out.push_str(std::str::from_utf8(&rest[..valid]).unwrap_or(""));
                            // error_len is None only for a truncated sequence
                            // at the end of the input.
                            let skip = err.error_len().unwrap_or(rest.len() - valid);
                            rest = &rest[valid + skip..];
                        }
                    }
                }
                Cow::Owned(out)
            }
        }
    }
}
