//! Annotated tree nodes and tree snapshots.

use crate::item::SortKey;
use crate::path::{self, DEFAULT_SEPARATOR};

/// Children of a node.
///
/// A node is a `Branch` only when its source item had a non-empty child
/// list. A branch whose children are all hidden by a filter is still a
/// branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Leaf,
    Branch(Vec<Node>),
}

impl Children {
    /// The child nodes, empty for a leaf.
    pub fn nodes(&self) -> &[Node] {
        match self {
            Self::Leaf => &[],
            Self::Branch(nodes) => nodes,
        }
    }
}

/// A node of the selection tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Key, unique among siblings.
    pub key: String,
    /// Display text.
    pub value: String,
    /// Tooltip override.
    pub title: Option<String>,
    /// Explicit ordering key.
    pub sort: Option<SortKey>,
    /// Deprioritized entry.
    pub is_background: bool,
    /// Promoted entry.
    pub is_important: bool,
    /// Path-key from the root to this node.
    pub path: String,
    /// Whether the node is selected.
    pub is_selected: bool,
    /// Whether the node survives the current filter.
    pub is_visible: bool,
    /// Nested nodes.
    pub children: Children,
}

impl Node {
    /// The child nodes, empty for a leaf.
    pub fn children(&self) -> &[Node] {
        self.children.nodes()
    }

    /// Check if the node has children.
    pub fn is_branch(&self) -> bool {
        matches!(self.children, Children::Branch(_))
    }

    /// Tooltip text: the title when set, otherwise the value.
    pub fn tooltip(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.value)
    }

    /// Copy this node's own fields onto new children.
    pub(crate) fn with_children(&self, children: Children) -> Node {
        Node {
            key: self.key.clone(),
            value: self.value.clone(),
            title: self.title.clone(),
            sort: self.sort.clone(),
            is_background: self.is_background,
            is_important: self.is_important,
            path: self.path.clone(),
            is_selected: self.is_selected,
            is_visible: self.is_visible,
            children,
        }
    }
}

/// An immutable snapshot of the selection tree.
///
/// Operations take a snapshot and return a new one, so an older snapshot can
/// be kept around (for undo or comparison) without being affected.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    roots: Vec<Node>,
    separator: char,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Tree {
    /// Create a tree using the default path separator.
    pub fn new(roots: Vec<Node>) -> Self {
        Self::with_separator(roots, DEFAULT_SEPARATOR)
    }

    /// Create a tree whose path-keys use `separator`.
    pub fn with_separator(roots: Vec<Node>, separator: char) -> Self {
        Self { roots, separator }
    }

    /// Root nodes in display order.
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Separator used in this tree's path-keys.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Replace the roots, keeping the separator.
    pub(crate) fn replace_roots(&self, roots: Vec<Node>) -> Tree {
        Self::with_separator(roots, self.separator)
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first, pre-order traversal of every node.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst::new(&self.roots)
    }

    /// Find a node by path-key.
    pub fn find(&self, path_key: &str) -> Option<&Node> {
        let keys = path::split(path_key, self.separator);
        let (first, rest) = keys.split_first()?;
        let mut node = self.roots.iter().find(|node| node.key == *first)?;
        for key in rest {
            node = node.children().iter().find(|child| child.key == *key)?;
        }
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = DepthFirst<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first, pre-order iterator over a tree.
///
/// A node is yielded before its children, and siblings in display order.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> DepthFirst<'a> {
    fn new(roots: &'a [Node]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
