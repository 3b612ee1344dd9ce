//! Final buffer assembly.

use treecat_core::EntryTree;

use crate::contents::render_contents;
use crate::tree::render_tree;

/// Assemble the complete dump for a walked tree: the root line with its
/// `/` suffix, the tree listing, a blank separator, then the content
/// blocks. This is the whole output; nothing is written incrementally.
pub fn render(tree: &EntryTree) -> String {
    let listing = render_tree(&tree.root);
    let contents = render_contents(&tree.root, &tree.root_path);

    format!("{}/\n{listing}\n\n{contents}", tree.root.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use treecat_core::{Entry, WalkStats};

    #[test]
    fn test_empty_tree_assembly() {
        let tree = EntryTree::new(
            Entry::new_directory("project"),
            PathBuf::from("/nonexistent/project"),
            WalkStats::new(),
            Duration::ZERO,
            Vec::new(),
        );

        assert_eq!(render(&tree), "project/\n\n\n");
    }

    #[test]
    fn test_tree_and_contents_are_separated() {
        let mut root = Entry::new_directory("project");
        root.children.push(Entry::new_file("data.bin"));

        let tree = EntryTree::new(
            root,
            PathBuf::from("/nonexistent/project"),
            WalkStats::new(),
            Duration::ZERO,
            Vec::new(),
        );

        // data.bin is not a text file, so no content blocks follow.
        assert_eq!(render(&tree), "project/\n└── data.bin\n\n\n");
    }
}
