//! JWalk-based parallel directory walker.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use compact_str::CompactString;
use jwalk::{Parallelism, WalkDir};

use treecat_core::{is_ignored, Entry, EntryTree, WalkError, WalkStats, WalkWarning};

/// Parallel walker producing a deterministic, canonically ordered tree.
pub struct Walker;

impl Walker {
    /// Create a new walker.
    pub fn new() -> Self {
        Self
    }

    /// Walk the given root directory.
    ///
    /// Ignored names are dropped before descent, so an ignored directory
    /// contributes nothing at all to the tree. Listing failures below the
    /// root become warnings on the returned tree; a failure to list the
    /// root itself is fatal.
    pub fn walk(&self, root: impl AsRef<Path>) -> Result<EntryTree, WalkError> {
        let start = Instant::now();
        let root = root.as_ref();
        let root_path = root.canonicalize().map_err(|e| WalkError::io(root, e))?;

        if !root_path.is_dir() {
            return Err(WalkError::NotADirectory { path: root_path });
        }

        let mut stats = WalkStats::new();
        let mut warnings = Vec::new();

        let mut entries = self.collect_entries(&root_path, &mut stats, &mut warnings)?;
        let mut root_node = self.build_node(&root_path, root_name(&root_path), &mut entries);
        root_node.sort_children();

        Ok(EntryTree::new(
            root_node,
            root_path,
            stats,
            start.elapsed(),
            warnings,
        ))
    }

    /// Collect all surviving entries, grouped by parent directory.
    fn collect_entries(
        &self,
        root_path: &Path,
        stats: &mut WalkStats,
        warnings: &mut Vec<WalkWarning>,
    ) -> Result<HashMap<PathBuf, Vec<ChildRecord>>, WalkError> {
        let walker = WalkDir::new(root_path)
            .parallelism(Parallelism::RayonDefaultPool {
                busy_timeout: std::time::Duration::from_millis(100),
            })
            .skip_hidden(false)
            .follow_links(false)
            .process_read_dir(|_depth, _dir_path, _state, children| {
                children.retain(|child| match child {
                    Ok(entry) => !is_ignored(&entry.file_name().to_string_lossy()),
                    Err(_) => true,
                });
            });

        let mut entries_by_parent: HashMap<PathBuf, Vec<ChildRecord>> = HashMap::new();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    if path == *root_path {
                        return Err(root_listing_error(root_path, err));
                    }
                    warnings.push(WalkWarning::read_error(path, &err));
                    continue;
                }
            };

            if entry.depth() == 0 {
                // The root's own listing failure means nothing was walked.
                if let Some(err) = entry.read_children_error {
                    return Err(root_listing_error(root_path, err));
                }
                continue;
            }

            let path = entry.path();
            let depth = entry.depth() as u32;
            let is_dir = entry.file_type().is_dir();

            if is_dir {
                stats.record_dir(depth);
                if let Some(err) = &entry.read_children_error {
                    warnings.push(WalkWarning::read_error(&path, err));
                }
            } else {
                // Symlinks and special files are plain entries; they are
                // never followed.
                stats.record_file(depth);
            }

            if let Some(parent) = path.parent() {
                entries_by_parent
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(ChildRecord {
                        name: CompactString::new(entry.file_name().to_string_lossy()),
                        path: path.clone(),
                        is_dir,
                    });
            }
        }

        Ok(entries_by_parent)
    }

    /// Recursively build a directory node and its children.
    fn build_node(
        &self,
        path: &Path,
        name: CompactString,
        entries_by_parent: &mut HashMap<PathBuf, Vec<ChildRecord>>,
    ) -> Entry {
        let mut node = Entry::new_directory(name);
        let records = entries_by_parent.remove(path).unwrap_or_default();

        for record in records {
            if record.is_dir {
                let child = self.build_node(&record.path, record.name, entries_by_parent);
                node.children.push(child);
            } else {
                node.children.push(Entry::new_file(record.name));
            }
        }

        node
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

/// Temporary record for one collected directory entry.
struct ChildRecord {
    name: CompactString,
    path: PathBuf,
    is_dir: bool,
}

/// Name for the root node: the directory's own name, falling back to the
/// whole path when it has no final component (e.g. `/`).
fn root_name(root_path: &Path) -> CompactString {
    root_path
        .file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(root_path.to_string_lossy()))
}

fn root_listing_error(root_path: &Path, err: jwalk::Error) -> WalkError {
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    WalkError::io(root_path, source)
}
