//! Walked tree container and statistics.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::WalkWarning;
use crate::node::Entry;

/// Summary statistics for a walked tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkStats {
    /// Total number of files.
    pub total_files: u64,
    /// Total number of directories, the root excluded.
    pub total_dirs: u64,
    /// Maximum depth reached, in levels below the root.
    pub max_depth: u32,
}

impl WalkStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file at the given depth.
    pub fn record_file(&mut self, depth: u32) {
        self.total_files += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a directory at the given depth.
    pub fn record_dir(&mut self, depth: u32) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Complete walked tree with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTree {
    /// Root entry; its name is the walked directory's own name.
    pub root: Entry,

    /// Canonicalized path that was walked.
    pub root_path: PathBuf,

    /// Summary statistics.
    pub stats: WalkStats,

    /// Warnings encountered during the walk.
    pub warnings: Vec<WalkWarning>,

    /// Duration of the walk.
    pub walk_duration: Duration,
}

impl EntryTree {
    /// Create a new entry tree.
    pub fn new(
        root: Entry,
        root_path: PathBuf,
        stats: WalkStats,
        walk_duration: Duration,
        warnings: Vec<WalkWarning>,
    ) -> Self {
        Self {
            root,
            root_path,
            stats,
            warnings,
            walk_duration,
        }
    }

    /// Get the total number of files.
    pub fn total_files(&self) -> u64 {
        self.stats.total_files
    }

    /// Get the total number of directories.
    pub fn total_dirs(&self) -> u64 {
        self.stats.total_dirs
    }

    /// Check if there were any warnings during the walk.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
