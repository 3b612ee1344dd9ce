//! Fixed ignore policy for walk traversal.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Names excluded from the walk entirely, stored lowercase.
static IGNORED_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        ".git",
        ".vscode",
        ".idea",
        "node_modules",
        "__pycache__",
        ".ds_store",
        "venv",
        ".env",
        "dist",
        "build",
        "target",
    ])
});

/// Check whether an entry name is excluded from the walk.
///
/// The comparison is case-insensitive and applies to files and
/// directories alike. An ignored entry is never listed, never read and
/// never descended into; the root itself is never checked.
pub fn is_ignored(name: &str) -> bool {
    IGNORED_NAMES.contains(name.to_lowercase().as_str())
}
