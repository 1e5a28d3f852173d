//! Reading the selection back out of a tree.

use crate::item::SelectedValue;
use crate::node::{Node, Tree};

use super::mode::SelectionPolicy;

/// Formats the preview shown for a multi-select control.
///
/// Implemented for closures, so callers can plug in their own localized
/// strings:
///
/// ```
/// use formtree::PreviewFormatter;
///
/// let german = |count: usize| format!("{count} ausgewählt");
/// assert_eq!(german.selected_count(3), "3 ausgewählt");
/// ```
pub trait PreviewFormatter: Send + Sync {
    /// Text for `count` selected nodes.
    fn selected_count(&self, count: usize) -> String;
}

/// English "Selected N" preview.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPreview;

impl PreviewFormatter for DefaultPreview {
    fn selected_count(&self, count: usize) -> String {
        format!("Selected {}", count)
    }
}

impl<F> PreviewFormatter for F
where
    F: Fn(usize) -> String + Send + Sync,
{
    fn selected_count(&self, count: usize) -> String {
        self(count)
    }
}

/// Every selected node, depth-first.
///
/// A selected parent and its selected descendants are all collected.
pub fn extract_selected(tree: &Tree) -> Vec<&Node> {
    tree.iter().filter(|node| node.is_selected).collect()
}

/// Preview text with the default multi-select formatter.
pub fn preview_text(tree: &Tree, policy: SelectionPolicy) -> String {
    preview_text_with(tree, policy, &DefaultPreview)
}

/// Preview text for the control's input while the list is closed.
///
/// Single-select shows the value of the first selected node (or nothing);
/// multi-select shows a count.
pub fn preview_text_with(
    tree: &Tree,
    policy: SelectionPolicy,
    formatter: &dyn PreviewFormatter,
) -> String {
    if policy.is_multi() {
        formatter.selected_count(extract_selected(tree).len())
    } else {
        tree.iter()
            .find(|node| node.is_selected)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }
}

/// The value emitted to the caller on commit.
///
/// Single-select yields the path-key of the first selected node or
/// [`SelectedValue::None`]; multi-select yields every selected path-key in
/// traversal order. Feeding the result back into
/// [`build`](crate::build::build) reproduces the selection.
pub fn committed_value(tree: &Tree, policy: SelectionPolicy) -> SelectedValue {
    let selected = extract_selected(tree);
    if policy.is_multi() {
        SelectedValue::Many(selected.iter().map(|node| node.path.clone()).collect())
    } else {
        selected
            .first()
            .map_or(SelectedValue::None, |node| SelectedValue::One(node.path.clone()))
    }
}
