//! Error types

/// Errors raised at the fallible edges of the engine.
///
/// Tree operations themselves never fail: malformed path-keys are absorbed as
/// no-ops. These errors come from loading item lists and from the opt-in
/// precondition checks in [`crate::check`].
#[derive(Debug, thiserror::Error)]
pub enum FormTreeError {
    /// The item list could not be parsed.
    #[error("invalid item list: {0}")]
    Json(#[from] serde_json::Error),

    /// Two siblings share the same key.
    #[error("duplicate key '{path}' among siblings")]
    DuplicateKey { path: String },

    /// An item has an empty key.
    #[error("empty key under '{parent}'")]
    EmptyKey { parent: String },

    /// A key contains the path separator and could not be addressed.
    #[error("key '{key}' contains the path separator '{separator}'")]
    SeparatorInKey { key: String, separator: char },

    /// A selected value names no path-key in the tree.
    #[error("value '{key}' does not match any path-key")]
    UnknownKey { key: String },
}

impl FormTreeError {
    /// Creates a new duplicate key error.
    pub fn duplicate_key(path: impl Into<String>) -> Self {
        Self::DuplicateKey { path: path.into() }
    }

    /// Creates a new empty key error.
    pub fn empty_key(parent: impl Into<String>) -> Self {
        Self::EmptyKey {
            parent: parent.into(),
        }
    }

    /// Creates a new separator-in-key error.
    pub fn separator_in_key(key: impl Into<String>, separator: char) -> Self {
        Self::SeparatorInKey {
            key: key.into(),
            separator,
        }
    }

    /// Creates a new unknown key error.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}
