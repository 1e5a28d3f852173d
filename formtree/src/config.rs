//! Autocomplete configuration

use serde::{Deserialize, Serialize};

use crate::filter::MatchMode;
use crate::path::DEFAULT_SEPARATOR;
use crate::selection::{SelectionMode, SelectionPolicy};

/// Behaviour flags of an autocomplete control.
///
/// # Example
///
/// ```
/// use formtree::{AutocompleteConfig, MatchMode};
///
/// let config = AutocompleteConfig::default()
///     .multiselect()
///     .required()
///     .with_match_mode(MatchMode::Fuzzy);
///
/// assert!(config.policy().is_multi());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteConfig {
    /// Whether several nodes can be selected.
    ///
    /// Default: false
    pub multiselect: bool,

    /// Keep the sole single-select selection when it is re-toggled, and
    /// refuse explicit clears in single mode.
    ///
    /// Default: false
    pub disable_deselect: bool,

    /// Whether an empty selection is invalid.
    ///
    /// Default: false
    pub required: bool,

    /// Whether the control is disabled. A disabled control is never
    /// evaluated for validity and cannot be cleared.
    ///
    /// Default: false
    pub disabled: bool,

    /// Separator between keys in path-keys.
    ///
    /// Default: `.`
    pub separator: char,

    /// How typed text is matched.
    ///
    /// Default: substring
    pub match_mode: MatchMode,

    /// Rows handed to the display layer per render slice.
    ///
    /// Default: 50
    pub page_size: usize,

    /// Height of one row in pixels, used to turn scroll offsets into slices.
    ///
    /// Default: 41
    pub row_height: f64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            multiselect: false,
            disable_deselect: false,
            required: false,
            disabled: false,
            separator: DEFAULT_SEPARATOR,
            match_mode: MatchMode::Substring,
            page_size: 50,
            row_height: 41.0,
        }
    }
}

impl AutocompleteConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow multiple selected nodes.
    pub fn multiselect(mut self) -> Self {
        self.multiselect = true;
        self
    }

    /// Enable the disable-deselect policy.
    pub fn disable_deselect(mut self) -> Self {
        self.disable_deselect = true;
        self
    }

    /// Mark the control as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the control as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets the path separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Sets the render slice size and row height.
    pub fn with_render_window(mut self, page_size: usize, row_height: f64) -> Self {
        self.page_size = page_size;
        self.row_height = row_height;
        self
    }

    /// The selection policy these flags describe.
    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            mode: if self.multiselect {
                SelectionMode::Multi
            } else {
                SelectionMode::Single
            },
            disable_deselect: self.disable_deselect,
        }
    }
}
