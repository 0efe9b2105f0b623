use std::path::Path;

use ignore::{DirEntry, WalkBuilder};

use crate::core::constants::traversal;

/// Whether a path segment is in the fixed skip-set.
///
/// The comparison is literal; `*.egg-info` only matches a segment that is
/// exactly `*.egg-info`.
pub fn is_skipped_segment(name: &str) -> bool {
    traversal::SKIP_SEGMENTS.contains(&name)
}

/// Walk every filesystem entry under `root`, pruning skip-set segments.
///
/// The standard ignore-file filters are disabled on purpose: hidden files,
/// gitignored files, and files under custom ignore rules are all still
/// visited. Only the fixed skip-set prunes traversal. Traversal order is
/// filesystem-dependent.
pub fn walk_tree(root: &Path) -> impl Iterator<Item = std::result::Result<DirEntry, ignore::Error>> {
    WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(|entry| {
            // The root itself is never pruned, whatever its name.
            if entry.depth() == 0 {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !is_skipped_segment(name))
        })
        .build()
}
