//! Filtering the tree by a text query.
//!
//! A node is visible when its own value matches the query or when any of
//! its descendants is visible. Hidden nodes stay in the tree; only their
//! `is_visible` flag changes.

mod matcher;

pub use matcher::{MatchMode, QueryMatcher};

use log::trace;

use crate::node::{Children, Node, Tree};
use crate::order::SortChain;

/// Filter with a case-insensitive substring match.
///
/// An empty query marks every node visible. Siblings are reordered with
/// [`SortChain::filter`].
pub fn filter(tree: &Tree, query: &str) -> Tree {
    filter_with(tree, query, MatchMode::Substring)
}

/// Filter using the given match mode.
pub fn filter_with(tree: &Tree, query: &str, mode: MatchMode) -> Tree {
    let mut matcher = QueryMatcher::new(query, mode);
    let chain = SortChain::filter();
    let roots = mark_visible(tree.roots(), &mut matcher, &chain);
    let filtered = tree.replace_roots(roots);
    trace!(
        "filter {:?}: {} of {} nodes visible",
        query,
        filtered.iter().filter(|node| node.is_visible).count(),
        filtered.len()
    );
    filtered
}

/// Mark every node visible and order siblings with `chain`.
pub(crate) fn reveal_all(tree: &Tree, chain: &SortChain) -> Tree {
    let mut matcher = QueryMatcher::new("", MatchMode::Substring);
    tree.replace_roots(mark_visible(tree.roots(), &mut matcher, chain))
}

fn mark_visible(nodes: &[Node], matcher: &mut QueryMatcher, chain: &SortChain) -> Vec<Node> {
    let level = nodes
        .iter()
        .map(|node| {
            let children = match &node.children {
                Children::Leaf => Children::Leaf,
                Children::Branch(children) => {
                    Children::Branch(mark_visible(children, matcher, chain))
                }
            };
            let child_visible = children.nodes().iter().any(|child| child.is_visible);
            let is_visible = matcher.matches(&node.value) || child_visible;

            Node {
                is_visible,
                ..node.with_children(children)
            }
        })
        .collect();
    chain.sort_level(level)
}
