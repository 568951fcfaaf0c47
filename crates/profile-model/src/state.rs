//! Root application state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldId};
use crate::profile::Profile;

/// Top-level state.
///
/// Replaced wholesale on every change. `next_field_id` is part of the state
/// so that minting ids stays deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// The profile being edited.
    pub current_profile: Arc<Profile>,
    /// Id handed to the next added field.
    pub next_field_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_profile: Arc::new(Profile::default()),
            next_field_id: 1,
        }
    }
}

impl AppState {
    /// Create state around an existing profile.
    ///
    /// The id counter starts past the highest id already in use.
    pub fn with_profile(profile: Profile) -> Self {
        let next_field_id = profile
            .fields
            .iter()
            .map(|f| f.id.0 + 1)
            .max()
            .unwrap_or(1);
        Self {
            current_profile: Arc::new(profile),
            next_field_id,
        }
    }

    /// Fields of the current profile, in display order.
    pub fn fields(&self) -> &[Arc<Field>] {
        &self.current_profile.fields
    }

    /// Look up a field by id.
    pub fn field(&self, id: FieldId) -> Option<&Arc<Field>> {
        self.current_profile.field(id)
    }

    /// Index of a field by id.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.current_profile.position(id)
    }
}
