//! Toggling, select-all and clear.

use log::debug;

use crate::node::{Children, Node, Tree};
use crate::path;

use super::mode::{SelectionMode, SelectionPolicy};

/// Toggle the node at `path_key`.
///
/// In multi mode only the target flips. In single mode the target flips
/// (unless disable-deselect holds it selected) and every other node in the
/// tree is deselected.
///
/// A path-key that names no node returns the tree unchanged, as does a
/// path that continues below a leaf.
pub fn toggle(tree: &Tree, path_key: &str, policy: SelectionPolicy) -> Tree {
    let toggled = match policy.mode {
        SelectionMode::Multi => toggle_multi(tree, path_key),
        SelectionMode::Single => toggle_single(tree, path_key, policy.disable_deselect),
    };
    match toggled {
        Some(tree) => tree,
        None => {
            debug!("ignoring toggle of unknown path {:?}", path_key);
            tree.clone()
        }
    }
}

/// Select every node at every depth.
pub fn select_all(tree: &Tree) -> Tree {
    tree.replace_roots(set_all(tree.roots(), true))
}

/// Deselect every node at every depth.
///
/// This is the unconditional operation; policy checks belong to the caller
/// (see [`SelectionPolicy::allows_clear`]).
pub fn clear(tree: &Tree) -> Tree {
    tree.replace_roots(set_all(tree.roots(), false))
}

fn toggle_multi(tree: &Tree, path_key: &str) -> Option<Tree> {
    let keys = path::split(path_key, tree.separator());
    let mut roots = tree.roots().to_vec();
    let node = descend_mut(&mut roots, &keys)?;
    node.is_selected = !node.is_selected;
    Some(tree.replace_roots(roots))
}

fn descend_mut<'a>(nodes: &'a mut [Node], keys: &[&str]) -> Option<&'a mut Node> {
    let (key, rest) = keys.split_first()?;
    let node = nodes.iter_mut().find(|node| node.key == *key)?;
    if rest.is_empty() {
        return Some(node);
    }
    match &mut node.children {
        Children::Branch(children) => descend_mut(children, rest),
        Children::Leaf => None,
    }
}

fn toggle_single(tree: &Tree, path_key: &str, disable_deselect: bool) -> Option<Tree> {
    tree.find(path_key)?;
    Some(tree.replace_roots(select_only(tree.roots(), path_key, disable_deselect)))
}

fn select_only(nodes: &[Node], target: &str, disable_deselect: bool) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| {
            let is_selected = if node.path == target {
                !node.is_selected || disable_deselect
            } else {
                false
            };
            let children = match &node.children {
                Children::Leaf => Children::Leaf,
                Children::Branch(children) => {
                    Children::Branch(select_only(children, target, disable_deselect))
                }
            };
            Node {
                is_selected,
                ..node.with_children(children)
            }
        })
        .collect()
}

fn set_all(nodes: &[Node], is_selected: bool) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| {
            let children = match &node.children {
                Children::Leaf => Children::Leaf,
                Children::Branch(children) => Children::Branch(set_all(children, is_selected)),
            };
            Node {
                is_selected,
                ..node.with_children(children)
            }
        })
        .collect()
}
