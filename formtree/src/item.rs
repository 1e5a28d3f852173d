//! Items supplied by the caller and the selection value they are built with.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::FormTreeError;
use crate::order::compare_text;

/// Explicit ordering key attached to an item.
///
/// Text keys compare like item values, number keys compare numerically.
/// When one side is text and the other a number, the number sorts first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Total order between two sort keys.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => compare_text(a, b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl From<f64> for SortKey {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SortKey {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A selectable entry as supplied by the caller.
///
/// Keys only need to be unique among siblings; the path-key built from the
/// ancestor keys identifies a node across the whole tree.
///
/// # Example
///
/// ```
/// use formtree::Item;
///
/// let items = Item::list_from_json(r#"[
///     { "key": "fruit", "value": "Fruit", "children": [
///         { "key": "apple", "value": "Apple", "sort": 2 },
///         { "key": "pear", "value": "Pear", "sort": 1 }
///     ]},
///     { "key": "misc", "value": "Misc", "isBackground": true }
/// ]"#).unwrap();
///
/// assert_eq!(items[0].children.len(), 2);
/// assert!(items[1].is_background);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Key, unique among siblings.
    pub key: String,
    /// Display text, also the text matched by the filter.
    pub value: String,
    /// Tooltip override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Explicit ordering key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
    /// Deprioritized entry, sorted after regular siblings.
    #[serde(default)]
    pub is_background: bool,
    /// Promoted entry, sorted before regular siblings.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_important: bool,
    /// Nested items. An empty list is treated as a leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
}

impl Item {
    /// Create a leaf item.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the tooltip text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the explicit ordering key.
    pub fn with_sort(mut self, sort: impl Into<SortKey>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Mark the item as a background entry.
    pub fn background(mut self) -> Self {
        self.is_background = true;
        self
    }

    /// Mark the item as an important entry.
    pub fn important(mut self) -> Self {
        self.is_important = true;
        self
    }

    /// Set the nested items.
    pub fn with_children(mut self, children: Vec<Item>) -> Self {
        self.children = children;
        self
    }

    /// Parse an item list from JSON.
    pub fn list_from_json(json: &str) -> Result<Vec<Item>, FormTreeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The selection a tree is built with, or the value emitted on commit.
///
/// Entries are path-keys. For root-level items the path-key is the key
/// itself, so flat lists can be addressed by plain keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedValue {
    /// Nothing selected.
    #[default]
    None,
    /// A single path-key.
    One(String),
    /// A list of path-keys.
    Many(Vec<String>),
}

impl SelectedValue {
    /// Check whether a path-key is part of the value.
    pub fn contains(&self, path: &str) -> bool {
        match self {
            Self::None => false,
            Self::One(key) => key == path,
            Self::Many(keys) => keys.iter().any(|key| key == path),
        }
    }

    /// Check if the value selects nothing.
    ///
    /// An empty string counts as empty, like a missing value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::One(key) => key.is_empty(),
            Self::Many(keys) => keys.is_empty(),
        }
    }

    /// All path-keys named by the value.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::None => Vec::new(),
            Self::One(key) if key.is_empty() => Vec::new(),
            Self::One(key) => vec![key.as_str()],
            Self::Many(keys) => keys.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for SelectedValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for SelectedValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for SelectedValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for SelectedValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Option<String>> for SelectedValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::None, Self::One)
    }
}
