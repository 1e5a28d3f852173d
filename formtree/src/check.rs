//! Opt-in precondition checks.
//!
//! Tree operations assume well-formed input and do not repair it. Callers
//! that load items from untrusted sources can run these checks first.

use std::collections::HashSet;

use crate::error::FormTreeError;
use crate::item::{Item, SelectedValue};
use crate::node::Tree;
use crate::path;

/// Check that every key is non-empty, free of the separator and unique
/// among its siblings.
pub fn check_items(items: &[Item], separator: char) -> Result<(), FormTreeError> {
    check_level(items, None, separator)
}

fn check_level(items: &[Item], parent: Option<&str>, separator: char) -> Result<(), FormTreeError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.key.is_empty() {
            return Err(FormTreeError::empty_key(parent.unwrap_or_default()));
        }
        if item.key.contains(separator) {
            return Err(FormTreeError::separator_in_key(&item.key, separator));
        }
        let path = path::join(parent, &item.key, separator);
        if !seen.insert(item.key.as_str()) {
            return Err(FormTreeError::duplicate_key(path));
        }
        check_level(&item.children, Some(&path), separator)?;
    }
    Ok(())
}

/// Check that every path-key in `value` names a node of `tree`.
///
/// A bare key of a nested node (for example `b` instead of `a.b`) does not
/// select anything and is reported here.
pub fn check_value(tree: &Tree, value: &SelectedValue) -> Result<(), FormTreeError> {
    for key in value.keys() {
        if tree.find(key).is_none() {
            return Err(FormTreeError::unknown_key(key));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build;

    #[test]
    fn test_valid_items() {
        let items = vec![
            Item::new("a", "A").with_children(vec![Item::new("a", "Nested A")]),
            Item::new("b", "B"),
        ];
        assert!(check_items(&items, '.').is_ok());
    }

    #[test]
    fn test_duplicate_sibling_key() {
        let items = vec![
            Item::new("a", "A").with_children(vec![Item::new("x", "X"), Item::new("x", "Y")]),
        ];
        let err = check_items(&items, '.').unwrap_err();
        assert!(matches!(err, FormTreeError::DuplicateKey { ref path } if path == "a.x"));
    }

    #[test]
    fn test_separator_in_key() {
        let items = vec![Item::new("a.b", "A")];
        let err = check_items(&items, '.').unwrap_err();
        assert!(matches!(err, FormTreeError::SeparatorInKey { separator: '.', .. }));
        assert!(check_items(&items, '/').is_ok());
    }

    #[test]
    fn test_empty_key() {
        let items = vec![Item::new("a", "A").with_children(vec![Item::new("", "Blank")])];
        let err = check_items(&items, '.').unwrap_err();
        assert_eq!(err.to_string(), "empty key under 'a'");
    }

    #[test]
    fn test_bare_nested_key_is_rejected() {
        let items = vec![Item::new("a", "Group").with_children(vec![Item::new("b", "Leaf")])];
        let tree = build(&items, &SelectedValue::None);
        assert!(check_value(&tree, &SelectedValue::from("a.b")).is_ok());
        let err = check_value(&tree, &SelectedValue::from("b")).unwrap_err();
        assert!(matches!(err, FormTreeError::UnknownKey { ref key } if key == "b"));
    }

    #[test]
    fn test_empty_value_is_ok() {
        let tree = build(&[Item::new("a", "A")], &SelectedValue::None);
        assert!(check_value(&tree, &SelectedValue::None).is_ok());
        assert!(check_value(&tree, &SelectedValue::from("")).is_ok());
    }
}
