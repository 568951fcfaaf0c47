//! Profile editing messages.

use profile_model::{Bound, FieldId, FieldKind};

/// Messages emitted by the profile editor grid and its field editors.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileMessage {
    /// The add control was pressed.
    AddFieldClicked,

    /// Remove a field.
    RemoveClicked(FieldId),

    /// Name input changed.
    NameChanged(FieldId, String),

    /// A kind was picked in the kind selector.
    KindSelected(FieldId, FieldKind),

    /// The nullable toggle was pressed.
    NullableToggled(FieldId),

    /// Move a field one position towards the start.
    MoveEarlier(FieldId),

    /// Move a field one position towards the end.
    MoveLater(FieldId),

    /// A restriction bound input changed.
    BoundChanged {
        id: FieldId,
        bound: Bound,
        text: String,
    },
}
