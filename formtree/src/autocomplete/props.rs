//! Caller-controlled inputs of an autocomplete control.

use serde::{Deserialize, Serialize};

use crate::item::{Item, SelectedValue};

/// The inputs a caller hands to the control.
///
/// Any change to these discards the session's transient state and rebuilds
/// the tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteProps {
    /// Identity of the control, echoed back on commit.
    pub name: String,
    /// Item list.
    pub items: Vec<Item>,
    /// Initial selection.
    pub value: SelectedValue,
    /// Validity override. `None` lets the control compute it.
    pub valid: Option<bool>,
}

impl AutocompleteProps {
    /// Create props for a named control.
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
            ..Default::default()
        }
    }

    /// Set the initial selection.
    pub fn with_value(mut self, value: impl Into<SelectedValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the validity override.
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    /// Check whether moving from `previous` to these props requires a
    /// rebuild.
    pub fn needs_rebuild(&self, previous: &AutocompleteProps) -> bool {
        self.name != previous.name
            || self.value != previous.value
            || self.valid != previous.valid
            || self.items != previous.items
    }
}
