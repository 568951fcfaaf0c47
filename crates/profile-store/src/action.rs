//! Actions: immutable descriptions of intended state changes.

use profile_model::{FieldId, FieldKind, Restrictions};

/// Closed set of state changes the reducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a blank field of the default kind.
    AddField,
    /// Remove a field.
    RemoveField { id: FieldId },
    /// Rename a field.
    RenameField { id: FieldId, name: String },
    /// Change a field's kind. Resets its restrictions.
    SetFieldKind { id: FieldId, kind: FieldKind },
    /// Change whether a field may be empty.
    SetNullable { id: FieldId, nullable: bool },
    /// Replace a field's restrictions. Must match the field's kind.
    SetRestrictions {
        id: FieldId,
        restrictions: Restrictions,
    },
    /// Move a field to a new index (clamped to the last index).
    MoveField { id: FieldId, to: usize },
}

impl Action {
    /// Short stable name for logs and the history panel.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddField => "add_field",
            Self::RemoveField { .. } => "remove_field",
            Self::RenameField { .. } => "rename_field",
            Self::SetFieldKind { .. } => "set_field_kind",
            Self::SetNullable { .. } => "set_nullable",
            Self::SetRestrictions { .. } => "set_restrictions",
            Self::MoveField { .. } => "move_field",
        }
    }

    /// The field this action targets, if any.
    pub fn target(&self) -> Option<FieldId> {
        match self {
            Self::AddField => None,
            Self::RemoveField { id }
            | Self::RenameField { id, .. }
            | Self::SetFieldKind { id, .. }
            | Self::SetNullable { id, .. }
            | Self::SetRestrictions { id, .. }
            | Self::MoveField { id, .. } => Some(*id),
        }
    }
}
