//! Output rendering for treecat.
//!
//! This crate derives the dump from a walked tree: the ASCII tree
//! listing, the content blocks for recognized text files, and the
//! assembled final buffer. File contents are read here rather than
//! during the walk; a file that cannot be read keeps its block with an
//! inline placeholder instead of failing the run.
//!
//! # Example
//!
//! ```rust,no_run
//! use treecat_scan::Walker;
//!
//! let tree = Walker::new().walk(".").unwrap();
//! let dump = treecat_render::render(&tree);
//! print!("{dump}");
//! ```

mod contents;
mod dump;
mod tree;

pub use contents::render_contents;
pub use dump::render;
pub use tree::render_tree;
