//! Field types.
//!
//! A [`Field`] is one typed entry of a profile. Fields are never edited in
//! place: every `with_*` method returns a new value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::restriction::Restrictions;

// =============================================================================
// FIELD ID
// =============================================================================

/// Identifier of a field, unique for the lifetime of an [`AppState`](crate::AppState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// FIELD KIND
// =============================================================================

/// Closed set of field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Kind not chosen yet. New fields start here.
    #[default]
    Unclassified,
    /// Free text.
    String,
    /// Integer or decimal numbers.
    Numeric,
    /// Calendar dates.
    Temporal,
}

impl FieldKind {
    /// All kinds, in display order.
    pub const ALL: [FieldKind; 4] = [
        Self::Unclassified,
        Self::String,
        Self::Numeric,
        Self::Temporal,
    ];

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unclassified => "Unclassified",
            Self::String => "String",
            Self::Numeric => "Numeric",
            Self::Temporal => "Temporal",
        }
    }

    /// Whether fields of this kind carry restriction bounds.
    pub fn has_bounds(&self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownFieldKind(s.to_string()))
    }
}

// =============================================================================
// FIELD
// =============================================================================

/// One entry in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Stable identifier.
    pub id: FieldId,
    /// Field name as typed by the user (may be empty).
    pub name: String,
    /// Kind tag.
    pub kind: FieldKind,
    /// Whether the field may be left empty.
    pub nullable: bool,
    /// Kind-specific configuration. Always matches `kind`.
    pub restrictions: Restrictions,
}

impl Field {
    /// Create a blank field of the default kind.
    pub fn blank(id: FieldId) -> Self {
        let kind = FieldKind::default();
        Self {
            id,
            name: String::new(),
            kind,
            nullable: false,
            restrictions: Restrictions::default_for(kind),
        }
    }

    /// Return a copy with a new name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Return a copy with a new kind.
    ///
    /// Restrictions are reset to the defaults of the new kind, even when the
    /// kind is unchanged.
    pub fn with_kind(&self, kind: FieldKind) -> Self {
        Self {
            kind,
            restrictions: Restrictions::default_for(kind),
            ..self.clone()
        }
    }

    /// Return a copy with a new nullable flag.
    pub fn with_nullable(&self, nullable: bool) -> Self {
        Self {
            nullable,
            ..self.clone()
        }
    }

    /// Return a copy with new restrictions.
    ///
    /// Fails when the restrictions belong to a different kind.
    pub fn with_restrictions(&self, restrictions: Restrictions) -> Result<Self, ModelError> {
        if restrictions.kind() != self.kind {
            return Err(ModelError::RestrictionMismatch {
                expected: self.kind,
                found: restrictions.kind(),
            });
        }
        Ok(Self {
            restrictions,
            ..self.clone()
        })
    }

    /// Name for display, with a placeholder for unnamed fields.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Untitled field {}", self.id)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_field_uses_default_kind() {
        let field = Field::blank(FieldId(7));
        assert_eq!(field.kind, FieldKind::Unclassified);
        assert_eq!(field.restrictions, Restrictions::Unclassified);
        assert!(field.name.is_empty());
        assert!(!field.nullable);
    }

    #[test]
    fn test_with_kind_resets_restrictions() {
        let field = Field::blank(FieldId(1)).with_kind(FieldKind::Numeric);
        let restricted = field
            .with_restrictions(Restrictions::Numeric {
                greater_than: Some(1.0),
                less_than: None,
            })
            .unwrap();

        let changed = restricted.with_kind(FieldKind::String);
        assert_eq!(
            changed.restrictions,
            Restrictions::default_for(FieldKind::String)
        );
        assert_eq!(changed.id, FieldId(1));
    }

    #[test]
    fn test_with_restrictions_rejects_other_kind() {
        let field = Field::blank(FieldId(1)).with_kind(FieldKind::String);
        let err = field
            .with_restrictions(Restrictions::default_for(FieldKind::Temporal))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::RestrictionMismatch {
                expected: FieldKind::String,
                found: FieldKind::Temporal,
            }
        );
    }

    #[test]
    fn test_field_kind_from_str() {
        assert_eq!("numeric".parse::<FieldKind>().unwrap(), FieldKind::Numeric);
        assert_eq!(" Temporal ".parse::<FieldKind>().unwrap(), FieldKind::Temporal);
        assert!("decimal".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_display_name() {
        let field = Field::blank(FieldId(3));
        assert_eq!(field.display_name(), "Untitled field #3");
        assert_eq!(field.with_name("age").display_name(), "age");
    }

    #[test]
    fn test_field_serializes_kind_lowercase() {
        let field = Field::blank(FieldId(2)).with_kind(FieldKind::Temporal);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["kind"], "temporal");
        assert_eq!(json["restrictions"]["kind"], "temporal");
    }
}
