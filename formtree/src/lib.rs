//! Hierarchical selection and filtering engine for autocomplete/select widgets.
//!
//! The engine owns a tree of selectable items built from a caller-supplied
//! item list. It supports single- and multi-select with an optional
//! disable-deselect policy, filters the tree by a text query while keeping
//! ancestors of matches visible, and orders siblings by a chain of
//! prioritized criteria.
//!
//! Every operation takes a [`Tree`] snapshot and returns a new one; the
//! [`Autocomplete`] session wraps the pure operations with the open/commit
//! lifecycle of a widget instance.
//!
//! # Example
//!
//! ```
//! use formtree::{Item, SelectedValue, SelectionPolicy, build, toggle, preview_text};
//!
//! let items = vec![Item::new("k1", "Apple"), Item::new("k2", "Banana")];
//! let tree = build(&items, &SelectedValue::from("k2"));
//! assert_eq!(preview_text(&tree, SelectionPolicy::single()), "Banana");
//!
//! let tree = toggle(&tree, "k1", SelectionPolicy::single());
//! assert_eq!(preview_text(&tree, SelectionPolicy::single()), "Apple");
//! ```

pub mod autocomplete;
pub mod build;
pub mod check;
pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod node;
pub mod order;
pub mod path;
pub mod selection;
pub mod validity;

pub use autocomplete::{
    Autocomplete, AutocompleteProps, ClearOutcome, Commit, FilterOutcome, InitOutcome,
    ItemOutcome, RenderWindow, Row,
};
pub use build::{build, build_with_separator};
pub use check::{check_items, check_value};
pub use config::AutocompleteConfig;
pub use error::FormTreeError;
pub use filter::{MatchMode, QueryMatcher, filter, filter_with};
pub use item::{Item, SelectedValue, SortKey};
pub use node::{Children, Node, Tree};
pub use order::{Criterion, SortChain};
pub use selection::{
    DefaultPreview, PreviewFormatter, SelectionMode, SelectionPolicy, clear, committed_value,
    extract_selected, preview_text, preview_text_with, select_all, toggle,
};
pub use validity::{Validity, compute_validity};
