//! Required-field validity.

use serde::{Deserialize, Serialize};

/// Validity signal of a control.
///
/// This is a presentation signal; it never blocks selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Validity {
    /// Not evaluated: the control is optional or disabled.
    #[default]
    Unevaluated,
    /// Passed.
    Valid,
    /// Failed.
    Invalid,
}

impl Validity {
    /// Check if the control passed validation.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the control failed validation.
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Check if validation produced a state at all.
    pub fn is_evaluated(self) -> bool {
        !matches!(self, Self::Unevaluated)
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

/// Compute the validity of a control.
///
/// An explicit override wins. Otherwise a required, enabled control is valid
/// when it has a value and invalid when it does not; anything else is not
/// evaluated.
pub fn compute_validity(
    validity_override: Option<bool>,
    required: bool,
    disabled: bool,
    has_value: bool,
) -> Validity {
    match validity_override {
        Some(valid) => Validity::from(valid),
        None if required && !disabled => Validity::from(has_value),
        None => Validity::Unevaluated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(compute_validity(Some(false), true, false, true), Validity::Invalid);
        assert_eq!(compute_validity(Some(true), false, true, false), Validity::Valid);
    }

    #[test]
    fn test_required() {
        assert_eq!(compute_validity(None, true, false, false), Validity::Invalid);
        assert_eq!(compute_validity(None, true, false, true), Validity::Valid);
    }

    #[test]
    fn test_optional_is_unevaluated() {
        assert_eq!(compute_validity(None, false, false, false), Validity::Unevaluated);
        assert!(!compute_validity(None, false, false, true).is_evaluated());
    }

    #[test]
    fn test_disabled_is_unevaluated() {
        assert_eq!(compute_validity(None, true, true, false), Validity::Unevaluated);
    }
}
