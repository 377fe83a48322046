//! Tri-state validity signal supplied by field callers.

/// Externally computed judgement about a field's current content.
///
/// The engine never infers validity; it only forwards the value the caller
/// supplies per content change. `Unknown` (no judgement yet) is deliberately
/// distinct from `Invalid`: collapsing the two would hide a real validation
/// failure behind "no information".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Validity {
    /// No judgement has been made about the content.
    #[default]
    Unknown,
    /// The content passed the caller's validation.
    Valid,
    /// The content failed the caller's validation.
    Invalid,
}

impl Validity {
    /// Returns `true` when a judgement (valid or invalid) exists.
    pub fn is_known(self) -> bool {
        self != Validity::Unknown
    }

    /// Returns `true` for [`Validity::Valid`].
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }

    /// Returns `true` for [`Validity::Invalid`].
    pub fn is_invalid(self) -> bool {
        self == Validity::Invalid
    }
}

/// Absent judgements normalize to `Unknown`.
impl From<Option<bool>> for Validity {
    fn from(judgement: Option<bool>) -> Self {
        match judgement {
            None => Validity::Unknown,
            Some(true) => Validity::Valid,
            Some(false) => Validity::Invalid,
        }
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid { Validity::Valid } else { Validity::Invalid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_judgement_is_unknown_not_invalid() {
        let v = Validity::from(None);
        assert_eq!(v, Validity::Unknown);
        assert!(!v.is_invalid());
        assert!(!v.is_known());
    }

    #[test]
    fn test_judgement_conversions() {
        assert_eq!(Validity::from(Some(true)), Validity::Valid);
        assert_eq!(Validity::from(Some(false)), Validity::Invalid);
        assert_eq!(Validity::from(true), Validity::Valid);
        assert_eq!(Validity::from(false), Validity::Invalid);
        assert_eq!(Validity::default(), Validity::Unknown);
    }
}
