//! Directory walking engine for treecat.
//!
//! This crate turns a root directory into a deterministic [`EntryTree`]:
//! parallel traversal via jwalk, the fixed ignore policy applied before
//! descent, and every directory's children sorted into listing order.
//!
//! # Example
//!
//! ```rust,no_run
//! use treecat_scan::Walker;
//!
//! let walker = Walker::new();
//! let tree = walker.walk(".").unwrap();
//!
//! println!("{} files, {} directories", tree.total_files(), tree.total_dirs());
//! ```

mod walker;

pub use walker::Walker;

// Re-export core types for convenience
pub use treecat_core::{Entry, EntryKind, EntryTree, WalkError, WalkStats, WalkWarning};
