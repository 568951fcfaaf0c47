//! UI state - kept out of the store.
//!
//! Bound inputs keep the raw text the user typed as a draft, so partial
//! input like `1.` or `2019-0` survives until it parses. Only parsed values
//! are dispatched.

use std::collections::HashMap;

use profile_model::{AppState, Bound, Field, FieldId, FieldKind};

use crate::component::Notice;

/// Raw text of one bound input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundDraft {
    /// Kind of the field when the draft was typed.
    pub kind: FieldKind,
    /// Text as typed.
    pub text: String,
    /// Parse error, if the text does not parse.
    pub error: Option<String>,
}

/// All UI state in one place.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Bound input drafts, by field and bound.
    pub drafts: HashMap<(FieldId, Bound), BoundDraft>,
    /// Visible notice.
    pub notice: Option<Notice>,
    /// Bumped each time a notice is shown. Expiry timers carry the value
    /// they were started for.
    pub notice_sequence: u64,
    /// Whether the history panel is open.
    pub show_history: bool,
}

impl UiState {
    /// Text to show in a bound input.
    pub fn bound_text(&self, field: &Field, bound: Bound) -> String {
        match self.drafts.get(&(field.id, bound)) {
            Some(draft) => draft.text.clone(),
            None => field.restrictions.bound_text(bound),
        }
    }

    /// Parse error to show under a bound input.
    pub fn bound_error(&self, id: FieldId, bound: Bound) -> Option<&str> {
        self.drafts
            .get(&(id, bound))
            .and_then(|draft| draft.error.as_deref())
    }

    /// Show `notice`, replacing the current one.
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_sequence = self.notice_sequence.wrapping_add(1);
    }

    /// Hide the notice if it is still the one shown as `sequence`.
    pub fn expire_notice(&mut self, sequence: u64) {
        if sequence == self.notice_sequence {
            self.notice = None;
        }
    }

    /// Drop drafts for fields that no longer exist or changed kind.
    pub fn prune_drafts(&mut self, state: &AppState) {
        self.drafts.retain(|(id, _), draft| {
            state
                .field(*id)
                .is_some_and(|field| field.kind == draft.kind)
        });
    }
}
