//! Path-keys: ancestor keys joined by a separator.

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '.';

/// Build the path-key of a child from its parent's path-key.
pub fn join(parent: Option<&str>, key: &str, separator: char) -> String {
    match parent {
        Some(parent) => {
            let mut path = String::with_capacity(parent.len() + key.len() + 1);
            path.push_str(parent);
            path.push(separator);
            path.push_str(key);
            path
        }
        None => key.to_string(),
    }
}

/// Split a path-key into its keys, root first.
///
/// An empty path-key yields no keys.
pub fn split(path: &str, separator: char) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(separator).collect()
}

/// Number of ancestors of the node a path-key names.
pub fn depth(path: &str, separator: char) -> usize {
    path.matches(separator).count()
}
