use std::path::Path;

use crate::core::constants::files;

/// Decide whether a regular file is eligible for scanning.
///
/// A file qualifies when its extension (the substring after the last `.` in
/// its name) is in the fixed allow-list, or when its exact name is one of the
/// bare names (`LICENSE`, `README`). Everything else is silently skipped;
/// callers are expected to have already rejected directories.
pub fn is_text_candidate(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if files::TEXT_EXTENSIONS.contains(&ext) {
            return true;
        }
    }

    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| files::BARE_NAMES.contains(&name))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_is_text_candidate__allow_listed_extensions() {
        for name in [
            "a.md", "a.txt", "a.py", "a.sh", "a.yaml", "a.yml", "a.json", "a.toml", "a.rst",
            "a.html", "a.xml", "a.cfg", "a.ini",
        ] {
            assert!(is_text_candidate(Path::new(name)), "expected {name} to pass");
        }
    }

    #[test]
    fn test_is_text_candidate__rejects_other_extensions() {
        for name in ["a.rs", "a.png", "a.log", "a.markdown", "a.MD"] {
            assert!(!is_text_candidate(Path::new(name)), "expected {name} to fail");
        }
    }

    #[test]
    fn test_is_text_candidate__bare_names() {
        assert!(is_text_candidate(Path::new("LICENSE")));
        assert!(is_text_candidate(Path::new("README")));
        assert!(is_text_candidate(Path::new("docs/LICENSE")));
    }

    #[test]
    fn test_is_text_candidate__bare_names_are_case_sensitive() {
        assert!(!is_text_candidate(Path::new("license")));
        assert!(!is_text_candidate(Path::new("Readme")));
    }

    #[test]
    fn test_is_text_candidate__only_last_extension_counts() {
        assert!(is_text_candidate(Path::new("archive.tar.md")));
        assert!(!is_text_candidate(Path::new("notes.md.bak")));
    }

    #[test]
    fn test_is_text_candidate__extensionless_and_dotfiles_rejected() {
        assert!(!is_text_candidate(Path::new("Makefile")));
        assert!(!is_text_candidate(Path::new(".gitignore")));
    }

    #[test]
    fn test_is_text_candidate__bare_name_with_extension_still_checked() {
        // LICENSE.txt passes via the extension, LICENSE.foo via neither rule.
        assert!(is_text_candidate(Path::new("LICENSE.txt")));
        assert!(!is_text_candidate(Path::new("LICENSE.foo")));
    }
}
