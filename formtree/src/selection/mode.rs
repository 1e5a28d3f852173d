//! Selection modes and the deselection policy.

use serde::{Deserialize, Serialize};

/// How many nodes may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// At most one node across the whole tree (radio-button style).
    #[default]
    Single,
    /// Any number of nodes, toggled independently (checkbox style).
    Multi,
}

/// Selection mode plus the disable-deselect policy.
///
/// With `disable_deselect` set, re-toggling the selected node in single
/// mode keeps it selected, so a single-select control never returns to an
/// empty selection by direct toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionPolicy {
    pub mode: SelectionMode,
    pub disable_deselect: bool,
}

impl SelectionPolicy {
    /// Single selection.
    pub fn single() -> Self {
        Self {
            mode: SelectionMode::Single,
            disable_deselect: false,
        }
    }

    /// Multiple selection.
    pub fn multi() -> Self {
        Self {
            mode: SelectionMode::Multi,
            disable_deselect: false,
        }
    }

    /// Forbid deselecting the current selection by re-toggling it.
    pub fn disable_deselect(mut self) -> Self {
        self.disable_deselect = true;
        self
    }

    /// Check if the policy allows multiple selected nodes.
    pub fn is_multi(&self) -> bool {
        self.mode == SelectionMode::Multi
    }

    /// Check whether an explicit clear may empty the selection.
    ///
    /// Multi-select can always be cleared. Single-select with
    /// disable-deselect cannot.
    pub fn allows_clear(&self) -> bool {
        self.is_multi() || !self.disable_deselect
    }
}
