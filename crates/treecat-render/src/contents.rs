//! Concatenated file content blocks.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use treecat_core::{is_text_file, Entry};

const CONTENT_START: &str = "=== FILE CONTENT START ===";
const CONTENT_END: &str = "=== FILE CONTENT END ===";

/// Render the content blocks for every recognized text file under
/// `root`, in listing order. `root_path` is the on-disk directory the
/// tree was walked from; block headers use `/`-joined relative paths
/// on every platform.
pub fn render_contents(root: &Entry, root_path: &Path) -> String {
    let mut out = String::new();
    dump_directory(root, "", root_path, &mut out);
    out
}

/// Append the blocks for one directory: subdirectory blocks come first
/// (children are in listing order, directories ahead of files), then
/// this directory's own files. The file reads fan out on rayon but the
/// blocks are appended in child order, so the output stays
/// deterministic.
fn dump_directory(node: &Entry, rel_prefix: &str, dir_path: &Path, out: &mut String) {
    let mut files: Vec<(String, PathBuf)> = Vec::new();

    for child in &node.children {
        let rel_path = if rel_prefix.is_empty() {
            child.name.to_string()
        } else {
            format!("{rel_prefix}/{}", child.name)
        };

        if child.is_dir() {
            dump_directory(child, &rel_path, &dir_path.join(child.name.as_str()), out);
        } else if is_text_file(&child.name) {
            files.push((rel_path, dir_path.join(child.name.as_str())));
        }
    }

    let blocks: Vec<String> = files
        .par_iter()
        .map(|(rel_path, path)| content_block(rel_path, path))
        .collect();

    for block in blocks {
        out.push_str(&block);
    }
}

/// Render one file's block. A failed read (permissions, the file vanished
/// since the walk, invalid UTF-8) keeps the block, with an inline
/// placeholder as its body.
fn content_block(rel_path: &str, path: &Path) -> String {
    let body = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("Could not read file {rel_path}: {err}");
            format!("# --- Error reading file: {err} ---")
        }
    };

    format!("# {rel_path}\n{CONTENT_START}\n{body}\n{CONTENT_END}\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_single_file_block() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.py"), "print(1)").unwrap();

        let mut root = Entry::new_directory("root");
        root.children.push(Entry::new_file("a.py"));

        assert_eq!(
            render_contents(&root, temp.path()),
            "# a.py\n=== FILE CONTENT START ===\nprint(1)\n=== FILE CONTENT END ===\n\n"
        );
    }

    #[test]
    fn test_non_text_files_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("image.png"), [0x89u8, 0x50, 0x4e, 0x47]).unwrap();

        let mut root = Entry::new_directory("root");
        root.children.push(Entry::new_file("image.png"));

        assert_eq!(render_contents(&root, temp.path()), "");
    }

    #[test]
    fn test_subdirectory_blocks_precede_parent_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/lib.rs"), "mod a;").unwrap();
        fs::write(temp.path().join("notes.md"), "hi").unwrap();

        let mut src = Entry::new_directory("src");
        src.children.push(Entry::new_file("lib.rs"));
        let mut root = Entry::new_directory("root");
        root.children.push(src);
        root.children.push(Entry::new_file("notes.md"));

        let contents = render_contents(&root, temp.path());
        let src_block = contents.find("# src/lib.rs").unwrap();
        let notes_block = contents.find("# notes.md").unwrap();
        assert!(src_block < notes_block);
    }

    #[test]
    fn test_missing_file_gets_placeholder_block() {
        let temp = TempDir::new().unwrap();

        let mut root = Entry::new_directory("root");
        root.children.push(Entry::new_file("gone.txt"));

        let contents = render_contents(&root, temp.path());
        assert!(contents.starts_with("# gone.txt\n=== FILE CONTENT START ===\n"));
        assert!(contents.contains("# --- Error reading file: "));
        assert!(contents.ends_with("=== FILE CONTENT END ===\n\n"));
    }

    #[test]
    fn test_invalid_utf8_gets_placeholder_block() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.txt"), [0xffu8, 0xfe, 0x00, 0x01]).unwrap();

        let mut root = Entry::new_directory("root");
        root.children.push(Entry::new_file("bad.txt"));

        let contents = render_contents(&root, temp.path());
        assert!(contents.contains("# --- Error reading file: "));
    }

    #[test]
    fn test_read_failure_does_not_stop_siblings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "real").unwrap();

        let mut root = Entry::new_directory("root");
        root.children.push(Entry::new_file("a.txt"));
        root.children.push(Entry::new_file("b.txt"));

        let contents = render_contents(&root, temp.path());
        assert!(contents.contains("# --- Error reading file: "));
        assert!(contents.contains("# b.txt\n=== FILE CONTENT START ===\nreal\n"));
    }

    #[test]
    fn test_relative_paths_use_forward_slashes() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();
        fs::write(temp.path().join("a/b/c.txt"), "x").unwrap();

        let mut b = Entry::new_directory("b");
        b.children.push(Entry::new_file("c.txt"));
        let mut a = Entry::new_directory("a");
        a.children.push(b);
        let mut root = Entry::new_directory("root");
        root.children.push(a);

        let contents = render_contents(&root, temp.path());
        assert!(contents.starts_with("# a/b/c.txt\n"));
    }
}
