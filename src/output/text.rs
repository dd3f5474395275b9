//! Text rendering of include trees for the terminal.

use crate::parser::IncludeTree;
use std::fmt::Write;

/// Render a tree with two spaces of indentation per include level
///
/// With `show_paths`, each line also carries the raw path when it differs
/// from the display name.
pub fn render_tree(tree: &IncludeTree, show_paths: bool) -> String {
    let mut out = String::new();

    for (depth, node) in tree.depth_first() {
        let indent = "  ".repeat(depth);
        let _ = if show_paths && node.raw_path != node.display_name {
            writeln!(out, "{}{}  ({})", indent, node.display_name, node.raw_path)
        } else {
            writeln!(out, "{}{}", indent, node.display_name)
        };
    }

    out
}

/// One-paragraph summary of a tree
pub fn render_summary(tree: &IncludeTree) -> String {
    format!(
        "Includes: {} | Distinct files: {} | Max depth: {}",
        tree.num_includes,
        tree.distinct_files(),
        tree.max_depth().map_or(0, |d| d + 1)
    )
}
