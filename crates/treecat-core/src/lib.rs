//! Core types and policy for treecat.
//!
//! This crate provides the data structures shared across the treecat
//! workspace together with its two fixed policy decisions: which entry
//! names are excluded from walks and which filenames count as text files.

mod classify;
mod error;
mod filter;
mod node;
mod tree;

pub use classify::is_text_file;
pub use error::{WalkError, WalkWarning};
pub use filter::is_ignored;
pub use node::{Entry, EntryKind};
pub use tree::{EntryTree, WalkStats};
