//! Flattening the tree into display rows.

use crate::node::{Node, Tree};

/// A visible node in the flattened list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    /// The node itself.
    pub node: &'a Node,
    /// Indentation level (0 = root).
    pub depth: usize,
}

impl<'a> Row<'a> {
    /// Path-key to pass back when the row is activated.
    pub fn path(&self) -> &'a str {
        &self.node.path
    }

    /// Display text.
    pub fn value(&self) -> &'a str {
        &self.node.value
    }

    /// Tooltip text.
    pub fn tooltip(&self) -> &'a str {
        self.node.tooltip()
    }

    /// Whether the node is selected.
    pub fn is_selected(&self) -> bool {
        self.node.is_selected
    }

    /// Whether the node has children.
    pub fn is_parent(&self) -> bool {
        self.node.is_branch()
    }
}

/// Flatten every visible node in display order.
///
/// A hidden node produces no row, but its visible descendants are still
/// listed and take its indentation level.
pub fn flatten(tree: &Tree) -> Vec<Row<'_>> {
    let mut rows = Vec::new();
    collect_visible(tree.roots(), 0, &mut rows);
    rows
}

fn collect_visible<'a>(nodes: &'a [Node], depth: usize, out: &mut Vec<Row<'a>>) {
    for node in nodes {
        if node.is_visible {
            out.push(Row { node, depth });
            collect_visible(node.children(), depth + 1, out);
        } else {
            collect_visible(node.children(), depth, out);
        }
    }
}
