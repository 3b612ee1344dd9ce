//! Entry and directory node types.

use std::cmp::Ordering;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Kind of directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file. Symlinks, sockets and devices land here too;
    /// they are never followed for traversal.
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }
}

/// A single file or directory in the scanned tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Entry name (not full path), lossy UTF-8 of the OS name.
    pub name: CompactString,

    /// Whether this entry is a file or a directory.
    pub kind: EntryKind,

    /// Child entries (directories only), in listing order after
    /// [`sort_children`](Entry::sort_children) has run.
    pub children: Vec<Entry>,
}

impl Entry {
    /// Create a new file entry.
    pub fn new_file(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: Vec::new(),
        }
    }

    /// Create a new directory entry.
    pub fn new_directory(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            children: Vec::new(),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Sort the whole subtree into listing order: directories before
    /// files, names ascending case-insensitively, raw byte order as the
    /// tiebreak so the ordering is total.
    pub fn sort_children(&mut self) {
        self.children.sort_by(Self::listing_order);
        for child in &mut self.children {
            child.sort_children();
        }
    }

    fn listing_order(a: &Entry, b: &Entry) -> Ordering {
        match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => {
                let folded = a
                    .name
                    .chars()
                    .flat_map(char::to_lowercase)
                    .cmp(b.name.chars().flat_map(char::to_lowercase));
                folded.then_with(|| a.name.as_str().cmp(b.name.as_str()))
            }
        }
    }
}
