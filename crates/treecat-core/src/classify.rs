//! Name-based text file classification.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase dotted extensions plus a few exact filenames whose contents
/// belong in the dump.
static TEXT_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        ".py",
        ".js",
        ".html",
        ".css",
        ".json",
        ".md",
        ".txt",
        ".cfg",
        ".ini",
        ".yaml",
        ".yml",
        ".sh",
        ".bat",
        ".xml",
        ".java",
        ".c",
        ".cpp",
        ".h",
        ".hpp",
        ".cs",
        ".go",
        ".php",
        ".rb",
        ".rs",
        ".swift",
        ".kt",
        ".kts",
        ".sql",
        ".dockerfile",
        "readme",
        ".gitignore",
        ".env",
        ".config",
        ".toml",
    ])
});

/// Decide from the filename alone whether a file counts as text.
///
/// The lowercased name is accepted either as a whole (exact entries like
/// `readme` or `.gitignore`) or by its last-dot suffix; a name without a
/// dot is checked as its own extension, so `Dockerfile` matches
/// `.dockerfile`. Purely name-based, no I/O, no content sniffing.
pub fn is_text_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    if TEXT_EXTENSIONS.contains(lower.as_str()) {
        return true;
    }
    match lower.rfind('.') {
        Some(idx) => TEXT_EXTENSIONS.contains(&lower[idx..]),
        None => TEXT_EXTENSIONS.contains(format!(".{lower}").as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_extensions() {
        assert!(is_text_file("main.rs"));
        assert!(is_text_file("setup.py"));
        assert!(is_text_file("notes.md"));
        assert!(is_text_file("Cargo.toml"));
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert!(is_text_file("a.PY"));
        assert!(is_text_file("README"));
        assert!(is_text_file("ReadMe"));
        assert!(is_text_file("readme"));
    }

    #[test]
    fn test_exact_names_and_dotfiles() {
        assert!(is_text_file(".gitignore"));
        assert!(is_text_file("local.env"));
        assert!(is_text_file("README.md"));
    }

    #[test]
    fn test_dotless_names_check_constructed_extension() {
        assert!(is_text_file("Dockerfile"));
        assert!(!is_text_file("Makefile"));
        assert!(!is_text_file("LICENSE"));
    }

    #[test]
    fn test_only_the_last_suffix_counts() {
        assert!(!is_text_file("archive.tar.gz"));
        assert!(is_text_file("config.local.json"));
    }

    #[test]
    fn test_binary_names_rejected() {
        assert!(!is_text_file("image.png"));
        assert!(!is_text_file("app.exe"));
        assert!(!is_text_file("weird."));
    }
}
