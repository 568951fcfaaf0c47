//! Profile: the ordered list of fields being edited.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldId};

/// A user-editable document consisting of an ordered list of fields.
///
/// Display order is vector order. Fields are shared, so cloning a profile
/// copies pointers, not field data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub fields: Vec<Arc<Field>>,
}

impl Profile {
    /// Create a profile from fields, in order.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().map(Arc::new).collect(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the profile has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the field with the given id.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    /// Look up a field by id.
    pub fn field(&self, id: FieldId) -> Option<&Arc<Field>> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Field ids in display order.
    pub fn ids(&self) -> Vec<FieldId> {
        self.fields.iter().map(|f| f.id).collect()
    }
}
