//! Autocomplete session state.

use log::{debug, trace};
use serde::Serialize;

use crate::build::build_with_separator;
use crate::config::AutocompleteConfig;
use crate::filter::{filter_with, reveal_all};
use crate::item::{Item, SelectedValue};
use crate::node::{Node, Tree};
use crate::order::SortChain;
use crate::selection::{
    self, DefaultPreview, PreviewFormatter, SelectionPolicy, committed_value, extract_selected,
    preview_text_with,
};
use crate::validity::{Validity, compute_validity};

use super::props::AutocompleteProps;
use super::rows::{Row, flatten};
use super::window::RenderWindow;

/// Result of (re)initializing the control.
#[derive(Debug, Clone, PartialEq)]
pub struct InitOutcome {
    pub tree: Tree,
    pub validity: Validity,
    pub preview: String,
}

/// Result of typing into the filter input.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub tree: Tree,
    /// Text shown in the input: the query while the list is open.
    pub preview: String,
}

/// Result of activating an item or the select-all entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    pub tree: Tree,
    /// Single-select closes the list and commits on activation.
    pub commit: Option<Commit>,
}

/// Result of clearing the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearOutcome {
    pub tree: Tree,
    pub commit: Commit,
}

/// The value handed to the caller's change callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Name of the control.
    pub name: String,
    /// Selected path-keys.
    pub value: SelectedValue,
    pub validity: Validity,
    /// Text shown in the input.
    pub preview: String,
}

/// One autocomplete control: its tree, filter text and open/closed state.
///
/// The session follows the widget lifecycle:
///
/// 1. [`initialize`](Self::initialize) or [`set_props`](Self::set_props)
///    builds the tree and shows the selection preview.
/// 2. [`open`](Self::open) (focus) reveals every node and floats the
///    selection to the top.
/// 3. [`on_filter_text_changed`](Self::on_filter_text_changed) and
///    [`on_item_activated`](Self::on_item_activated) update the tree.
/// 4. [`on_commit`](Self::on_commit) (blur) closes the list and reports the
///    selection.
///
/// # Example
///
/// ```
/// use formtree::{Autocomplete, AutocompleteConfig, AutocompleteProps, Item, SelectedValue};
///
/// let mut control = Autocomplete::new(AutocompleteConfig::default().multiselect());
/// control.set_props(AutocompleteProps::new(
///     "fruit",
///     vec![Item::new("k1", "Apple"), Item::new("k2", "Banana")],
/// ));
///
/// control.open();
/// control.on_filter_text_changed("ban");
/// control.on_item_activated("k2");
/// let commit = control.on_commit();
///
/// assert_eq!(commit.value, SelectedValue::from(vec!["k2"]));
/// assert_eq!(commit.preview, "Selected 1");
/// ```
pub struct Autocomplete {
    config: AutocompleteConfig,
    formatter: Box<dyn PreviewFormatter>,
    props: AutocompleteProps,
    tree: Tree,
    text: String,
    is_open: bool,
    validity: Validity,
    window: RenderWindow,
    initialized: bool,
}

impl Autocomplete {
    /// Create an empty control.
    pub fn new(config: AutocompleteConfig) -> Self {
        let window = RenderWindow::new(config.page_size, config.row_height);
        Self {
            config,
            formatter: Box::new(DefaultPreview),
            props: AutocompleteProps::default(),
            tree: Tree::default(),
            text: String::new(),
            is_open: false,
            validity: Validity::Unevaluated,
            window,
            initialized: false,
        }
    }

    /// Use a custom multi-select preview.
    pub fn with_preview_formatter(mut self, formatter: impl PreviewFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        if !self.is_open {
            self.text = self.preview();
        }
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The behaviour flags.
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// The selection policy derived from the config.
    pub fn policy(&self) -> SelectionPolicy {
        self.config.policy()
    }

    /// The current props.
    pub fn props(&self) -> &AutocompleteProps {
        &self.props
    }

    /// The current tree snapshot.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Text shown in the input: the query while open, the preview while
    /// closed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Validity as of the last initialization or commit.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Every selected node, depth-first.
    pub fn selected(&self) -> Vec<&Node> {
        extract_selected(&self.tree)
    }

    /// Check whether every node of a non-empty tree is selected.
    pub fn are_all_selected(&self) -> bool {
        !self.tree.is_empty() && self.tree.iter().all(|node| node.is_selected)
    }

    /// Check whether the clear button should be shown.
    pub fn clear_button_visible(&self) -> bool {
        self.can_clear() && self.tree.iter().any(|node| node.is_selected)
    }

    /// Check whether the open list should show its empty-list placeholder.
    pub fn shows_no_data(&self) -> bool {
        self.is_open && self.tree.is_empty()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Apply new props, rebuilding when they differ from the current ones.
    ///
    /// Returns `None` when nothing changed.
    pub fn set_props(&mut self, props: AutocompleteProps) -> Option<InitOutcome> {
        if self.initialized && !props.needs_rebuild(&self.props) {
            return None;
        }
        let AutocompleteProps {
            name,
            items,
            value,
            valid,
        } = props;
        self.props.name = name;
        Some(self.initialize(items, value, valid))
    }

    /// Build the tree from scratch.
    ///
    /// Discards the filter text, the open state and the scroll position.
    ///
    /// Initial validity follows `value` as given, not the nodes it selects:
    /// a non-empty value that names no path-key leaves the tree with no
    /// selection but still counts as a value for a required control. The
    /// next commit re-evaluates validity from the tree. Use
    /// [`check_value`](crate::check::check_value) to detect such values.
    pub fn initialize(
        &mut self,
        items: Vec<Item>,
        value: SelectedValue,
        validity_override: Option<bool>,
    ) -> InitOutcome {
        self.tree = build_with_separator(&items, &value, self.config.separator);
        self.validity = compute_validity(
            validity_override,
            self.config.required,
            self.config.disabled,
            !value.is_empty(),
        );
        self.props.items = items;
        self.props.value = value;
        self.props.valid = validity_override;
        self.initialized = true;
        self.is_open = false;
        self.window.reset();
        self.text = self.preview();

        debug!(
            "autocomplete {:?} initialized: {} nodes, validity {:?}",
            self.props.name,
            self.tree.len(),
            self.validity
        );

        InitOutcome {
            tree: self.tree.clone(),
            validity: self.validity,
            preview: self.text.clone(),
        }
    }

    /// Open the list (the input gained focus).
    ///
    /// Clears the query, reveals every node and orders siblings with the
    /// selection first. Opening an open list does nothing.
    pub fn open(&mut self) -> &Tree {
        if self.is_open || self.config.disabled {
            return &self.tree;
        }
        self.tree = reveal_all(&self.tree, &SortChain::open());
        self.is_open = true;
        self.text.clear();
        self.window.reset();
        trace!("autocomplete {:?} opened", self.props.name);
        &self.tree
    }

    /// The query text changed.
    ///
    /// Opens the list first if it is closed.
    pub fn on_filter_text_changed(&mut self, text: &str) -> FilterOutcome {
        if self.config.disabled {
            return FilterOutcome {
                tree: self.tree.clone(),
                preview: self.text.clone(),
            };
        }
        self.open();
        self.tree = filter_with(&self.tree, text, self.config.match_mode);
        self.text = text.to_string();
        FilterOutcome {
            tree: self.tree.clone(),
            preview: self.text.clone(),
        }
    }

    /// An item row was activated.
    ///
    /// In single-select mode this also closes the list and commits.
    pub fn on_item_activated(&mut self, path_key: &str) -> ItemOutcome {
        if self.config.disabled {
            debug!("ignoring activation of {:?} on disabled control", path_key);
            return ItemOutcome {
                tree: self.tree.clone(),
                commit: None,
            };
        }
        let policy = self.policy();
        self.tree = selection::toggle(&self.tree, path_key, policy);
        let commit = if policy.is_multi() {
            None
        } else {
            Some(self.on_commit())
        };
        ItemOutcome {
            tree: self.tree.clone(),
            commit,
        }
    }

    /// The select-all entry was activated. Only meaningful in multi mode.
    pub fn on_select_all_activated(&mut self) -> ItemOutcome {
        if self.policy().is_multi() && !self.config.disabled {
            self.tree = selection::select_all(&self.tree);
        } else {
            debug!("ignoring select-all on {:?}", self.props.name);
        }
        ItemOutcome {
            tree: self.tree.clone(),
            commit: None,
        }
    }

    /// The control lost focus: close the list and report the selection.
    pub fn on_commit(&mut self) -> Commit {
        self.is_open = false;
        self.emit()
    }

    /// The clear button was pressed.
    ///
    /// Deselects everything and reports the new selection without closing
    /// the list. Refused (returns `None`) when the control is disabled or
    /// when single-select runs with disable-deselect.
    pub fn on_clear(&mut self) -> Option<ClearOutcome> {
        if !self.can_clear() {
            debug!("clear refused on {:?}", self.props.name);
            return None;
        }
        self.tree = selection::clear(&self.tree);
        let commit = self.emit();
        Some(ClearOutcome {
            tree: self.tree.clone(),
            commit,
        })
    }

    /// The list was scrolled. Returns the number of rows to render.
    pub fn on_scroll(&mut self, scroll_top: f64) -> usize {
        self.window.scroll_to(scroll_top)
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Rows to render: visible nodes in display order, limited to the render
    /// window. Empty while the list is closed.
    pub fn rows(&self) -> Vec<Row<'_>> {
        if !self.is_open {
            return Vec::new();
        }
        let mut rows = flatten(&self.tree);
        rows.truncate(self.window.rendered_rows());
        rows
    }

    /// Number of visible rows, ignoring the render window.
    pub fn row_count(&self) -> usize {
        flatten(&self.tree).len()
    }

    fn can_clear(&self) -> bool {
        !self.config.disabled && self.policy().allows_clear()
    }

    fn preview(&self) -> String {
        preview_text_with(&self.tree, self.policy(), self.formatter.as_ref())
    }

    fn emit(&mut self) -> Commit {
        let policy = self.policy();
        let value = committed_value(&self.tree, policy);
        self.validity = compute_validity(
            self.props.valid,
            self.config.required,
            self.config.disabled,
            !value.is_empty(),
        );
        if !self.is_open {
            self.text = self.preview();
        }

        debug!(
            "autocomplete {:?} committed {:?} ({:?})",
            self.props.name, value, self.validity
        );

        Commit {
            name: self.props.name.clone(),
            value,
            validity: self.validity,
            preview: self.text.clone(),
        }
    }
}

impl std::fmt::Debug for Autocomplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("config", &self.config)
            .field("props", &self.props)
            .field("tree", &self.tree)
            .field("text", &self.text)
            .field("is_open", &self.is_open)
            .field("validity", &self.validity)
            .field("window", &self.window)
            .finish()
    }
}
