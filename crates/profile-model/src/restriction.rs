//! Kind-specific field restrictions.
//!
//! Every restricted kind has a lower and an upper bound, each optional:
//!
//! | Kind       | Lower bound     | Upper bound    |
//! |------------|-----------------|----------------|
//! | String     | longer than     | shorter than   |
//! | Numeric    | greater than    | less than      |
//! | Temporal   | after           | before         |
//!
//! Bounds are not cross-checked against each other.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::field::FieldKind;

/// Date format accepted and produced for temporal bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which end of a restriction range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Lower,
    Upper,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("lower"),
            Self::Upper => f.write_str("upper"),
        }
    }
}

/// Kind-specific configuration of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Restrictions {
    Unclassified,
    String {
        longer_than: Option<u32>,
        shorter_than: Option<u32>,
    },
    Numeric {
        greater_than: Option<f64>,
        less_than: Option<f64>,
    },
    Temporal {
        after: Option<NaiveDate>,
        before: Option<NaiveDate>,
    },
}

impl Restrictions {
    /// Unbounded restrictions for a kind.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Unclassified => Self::Unclassified,
            FieldKind::String => Self::String {
                longer_than: None,
                shorter_than: None,
            },
            FieldKind::Numeric => Self::Numeric {
                greater_than: None,
                less_than: None,
            },
            FieldKind::Temporal => Self::Temporal {
                after: None,
                before: None,
            },
        }
    }

    /// The kind these restrictions belong to.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Unclassified => FieldKind::Unclassified,
            Self::String { .. } => FieldKind::String,
            Self::Numeric { .. } => FieldKind::Numeric,
            Self::Temporal { .. } => FieldKind::Temporal,
        }
    }

    /// Label of a bound, e.g. "Shorter than" for the upper string bound.
    ///
    /// Returns `None` for kinds without bounds.
    pub fn bound_label(kind: FieldKind, bound: Bound) -> Option<&'static str> {
        let label = match (kind, bound) {
            (FieldKind::Unclassified, _) => return None,
            (FieldKind::String, Bound::Lower) => "Longer than",
            (FieldKind::String, Bound::Upper) => "Shorter than",
            (FieldKind::Numeric, Bound::Lower) => "Greater than",
            (FieldKind::Numeric, Bound::Upper) => "Less than",
            (FieldKind::Temporal, Bound::Lower) => "After",
            (FieldKind::Temporal, Bound::Upper) => "Before",
        };
        Some(label)
    }

    /// Render a bound as editable text. Unset bounds render empty.
    pub fn bound_text(&self, bound: Bound) -> String {
        match (self, bound) {
            (Self::Unclassified, _) => String::new(),
            (Self::String { longer_than, .. }, Bound::Lower) => opt_to_string(longer_than),
            (Self::String { shorter_than, .. }, Bound::Upper) => opt_to_string(shorter_than),
            (Self::Numeric { greater_than, .. }, Bound::Lower) => opt_to_string(greater_than),
            (Self::Numeric { less_than, .. }, Bound::Upper) => opt_to_string(less_than),
            (Self::Temporal { after, .. }, Bound::Lower) => format_date(after),
            (Self::Temporal { before, .. }, Bound::Upper) => format_date(before),
        }
    }

    /// Return a copy with one bound parsed from user text.
    ///
    /// Blank text clears the bound.
    pub fn with_bound(&self, bound: Bound, input: &str) -> Result<Self, ModelError> {
        let kind = self.kind();
        let trimmed = input.trim();
        let invalid = |reason: &dyn fmt::Display| ModelError::invalid_bound(kind, bound, input, reason);

        let mut next = self.clone();
        match (&mut next, bound) {
            (Self::Unclassified, _) => {
                return Err(invalid(&"unclassified fields have no bounds"));
            }
            (Self::String { longer_than, .. }, Bound::Lower) => {
                *longer_than = parse_opt(trimmed).map_err(|e| invalid(&e))?;
            }
            (Self::String { shorter_than, .. }, Bound::Upper) => {
                *shorter_than = parse_opt(trimmed).map_err(|e| invalid(&e))?;
            }
            (Self::Numeric { greater_than, .. }, Bound::Lower) => {
                *greater_than = parse_finite(trimmed).map_err(|e| invalid(&e))?;
            }
            (Self::Numeric { less_than, .. }, Bound::Upper) => {
                *less_than = parse_finite(trimmed).map_err(|e| invalid(&e))?;
            }
            (Self::Temporal { after, .. }, Bound::Lower) => {
                *after = parse_date(trimmed).map_err(|e| invalid(&e))?;
            }
            (Self::Temporal { before, .. }, Bound::Upper) => {
                *before = parse_date(trimmed).map_err(|e| invalid(&e))?;
            }
        }
        Ok(next)
    }
}

// =============================================================================
// PARSING HELPERS
// =============================================================================

fn opt_to_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn format_date(value: &Option<NaiveDate>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_opt<T: std::str::FromStr>(text: &str) -> Result<Option<T>, T::Err> {
    if text.is_empty() {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}

fn parse_finite(text: &str) -> Result<Option<f64>, String> {
    match parse_opt::<f64>(text).map_err(|e| e.to_string())? {
        Some(value) if !value.is_finite() => Err("value must be a finite number".to_string()),
        other => Ok(other),
    }
}

fn parse_date(text: &str) -> Result<Option<NaiveDate>, String> {
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|e| format!("{e} (expected YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_matches_kind() {
        for kind in FieldKind::ALL {
            assert_eq!(Restrictions::default_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_string_bounds() {
        let r = Restrictions::default_for(FieldKind::String)
            .with_bound(Bound::Lower, "2")
            .unwrap()
            .with_bound(Bound::Upper, " 10 ")
            .unwrap();
        assert_eq!(
            r,
            Restrictions::String {
                longer_than: Some(2),
                shorter_than: Some(10),
            }
        );
        assert_eq!(r.bound_text(Bound::Upper), "10");
    }

    #[test]
    fn test_blank_input_clears_bound() {
        let r = Restrictions::Numeric {
            greater_than: Some(0.5),
            less_than: Some(3.0),
        };
        let cleared = r.with_bound(Bound::Lower, "   ").unwrap();
        assert_eq!(
            cleared,
            Restrictions::Numeric {
                greater_than: None,
                less_than: Some(3.0),
            }
        );
        assert_eq!(cleared.bound_text(Bound::Lower), "");
        assert_eq!(cleared.bound_text(Bound::Upper), "3");
    }

    #[test]
    fn test_numeric_rejects_garbage_and_non_finite() {
        let r = Restrictions::default_for(FieldKind::Numeric);
        assert!(matches!(
            r.with_bound(Bound::Lower, "abc"),
            Err(ModelError::InvalidBound { .. })
        ));
        assert!(r.with_bound(Bound::Upper, "NaN").is_err());
        assert!(r.with_bound(Bound::Upper, "inf").is_err());
        assert!(r.with_bound(Bound::Upper, "-1.25").is_ok());
    }

    #[test]
    fn test_temporal_bounds() {
        let r = Restrictions::default_for(FieldKind::Temporal)
            .with_bound(Bound::Lower, "2019-01-31")
            .unwrap();
        assert_eq!(r.bound_text(Bound::Lower), "2019-01-31");

        let err = r.with_bound(Bound::Upper, "31/01/2019").unwrap_err();
        match err {
            ModelError::InvalidBound {
                kind, bound, input, ..
            } => {
                assert_eq!(kind, FieldKind::Temporal);
                assert_eq!(bound, Bound::Upper);
                assert_eq!(input, "31/01/2019");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unclassified_has_no_bounds() {
        let r = Restrictions::Unclassified;
        assert!(r.with_bound(Bound::Lower, "1").is_err());
        assert_eq!(r.bound_text(Bound::Upper), "");
        assert_eq!(
            Restrictions::bound_label(FieldKind::Unclassified, Bound::Lower),
            None
        );
    }

    #[test]
    fn test_string_rejects_negative_length() {
        let r = Restrictions::default_for(FieldKind::String);
        assert!(r.with_bound(Bound::Lower, "-3").is_err());
    }
}
