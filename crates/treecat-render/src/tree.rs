//! ASCII tree listing.

use treecat_core::Entry;

/// Render the tree lines for everything below `root`.
///
/// One line per entry, `├── ` for a non-last sibling and `└── ` for the
/// last, continuation columns `│   ` or four spaces per ancestor level,
/// and a `/` suffix on directory names. The root's own line is not
/// included here; final assembly adds it.
pub fn render_tree(root: &Entry) -> String {
    let mut out = String::new();
    render_children(root, "", &mut out);
    out
}

fn render_children(node: &Entry, prefix: &str, out: &mut String) {
    let total = node.children.len();

    for (i, child) in node.children.iter().enumerate() {
        let is_last = i + 1 == total;
        let connector = if is_last { "└── " } else { "├── " };

        if child.is_dir() {
            out.push_str(&format!("{prefix}{connector}{}/\n", child.name));
            let child_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            render_children(child, &child_prefix, out);
        } else {
            out.push_str(&format!("{prefix}{connector}{}\n", child.name));
        }
    }
}
