//! Building the annotated tree from caller items.

use log::debug;

use crate::item::{Item, SelectedValue};
use crate::node::{Children, Node, Tree};
use crate::order::SortChain;
use crate::path::{self, DEFAULT_SEPARATOR};

/// Build a tree from `items`, selecting the nodes named by `selected`.
///
/// Nodes are matched by path-key, which for root-level items is the plain
/// key. Every node starts visible. Values that match no node are ignored,
/// so an unknown value yields an all-deselected tree.
///
/// Siblings are ordered by [`SortChain::build`].
pub fn build(items: &[Item], selected: &SelectedValue) -> Tree {
    build_with_separator(items, selected, DEFAULT_SEPARATOR)
}

/// Like [`build`], joining path-keys with `separator`.
pub fn build_with_separator(items: &[Item], selected: &SelectedValue, separator: char) -> Tree {
    let chain = SortChain::build();
    let roots = build_level(items, None, selected, separator, &chain);
    let tree = Tree::with_separator(roots, separator);
    debug!(
        "built tree: {} nodes, {} selected",
        tree.len(),
        tree.iter().filter(|node| node.is_selected).count()
    );
    tree
}

fn build_level(
    items: &[Item],
    parent: Option<&str>,
    selected: &SelectedValue,
    separator: char,
    chain: &SortChain,
) -> Vec<Node> {
    let nodes = items
        .iter()
        .map(|item| {
            let path = path::join(parent, &item.key, separator);
            let children = if item.children.is_empty() {
                Children::Leaf
            } else {
                Children::Branch(build_level(
                    &item.children,
                    Some(&path),
                    selected,
                    separator,
                    chain,
                ))
            };

            Node {
                key: item.key.clone(),
                value: item.value.clone(),
                title: item.title.clone(),
                sort: item.sort.clone(),
                is_background: item.is_background,
                is_important: item.is_important,
                is_selected: selected.contains(&path),
                is_visible: true,
                path,
                children,
            }
        })
        .collect();
    chain.sort_level(nodes)
}
