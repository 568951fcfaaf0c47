//! Error types for model operations.

use thiserror::Error;

use crate::field::FieldKind;
use crate::restriction::Bound;

/// Errors raised when building model values from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Text could not be parsed into the bound type of a restriction.
    #[error("Invalid {bound} bound for {kind} field '{input}': {reason}")]
    InvalidBound {
        kind: FieldKind,
        bound: Bound,
        input: String,
        reason: String,
    },

    /// Restrictions of one kind were applied to a field of another kind.
    #[error("Restrictions for {found} fields cannot be applied to a {expected} field")]
    RestrictionMismatch {
        expected: FieldKind,
        found: FieldKind,
    },

    /// Unknown field kind name.
    #[error("Unknown field kind: {0}")]
    UnknownFieldKind(String),
}

impl ModelError {
    pub(crate) fn invalid_bound(
        kind: FieldKind,
        bound: Bound,
        input: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidBound {
            kind,
            bound,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
