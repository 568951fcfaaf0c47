//! Profile message handler.
//!
//! Turns view messages into store actions. Values that need parsing (bound
//! inputs) are validated here; only valid values reach the store.

use iced::Task;
use profile_model::{Bound, FieldId, ModelError};
use profile_store::Action;

use crate::component::NoticeMessage;
use crate::effect::Effect;
use crate::error::EditorError;
use crate::handler::MessageHandler;
use crate::message::{Message, ProfileMessage};
use crate::state::{BoundDraft, EditorState};

/// Handler for [`ProfileMessage`].
pub struct ProfileHandler;

impl MessageHandler<ProfileMessage> for ProfileHandler {
    fn handle(&self, state: &mut EditorState, msg: ProfileMessage) -> Task<Message> {
        let current = state.store.state();

        let action = match msg {
            ProfileMessage::AddFieldClicked => Some(Action::AddField),

            ProfileMessage::RemoveClicked(id) => Some(Action::RemoveField { id }),

            ProfileMessage::NameChanged(id, name) => Some(Action::RenameField { id, name }),

            ProfileMessage::KindSelected(id, kind) => Some(Action::SetFieldKind { id, kind }),

            ProfileMessage::NullableToggled(id) => current.field(id).map(|field| {
                Action::SetNullable {
                    id,
                    nullable: !field.nullable,
                }
            }),

            ProfileMessage::MoveEarlier(id) => current
                .position(id)
                .and_then(|index| index.checked_sub(1))
                .map(|to| Action::MoveField { id, to }),

            ProfileMessage::MoveLater(id) => current
                .position(id)
                .map(|index| Action::MoveField { id, to: index + 1 }),

            ProfileMessage::BoundChanged { id, bound, text } => {
                bound_action(state, id, bound, text)
            }
        };

        match action {
            Some(action) => dispatch(state, action),
            None => Task::none(),
        }
    }
}

/// Record the typed text as a draft and build the action for it, if it parses.
fn bound_action(
    state: &mut EditorState,
    id: FieldId,
    bound: Bound,
    text: String,
) -> Option<Action> {
    let field = state.store.state().field(id).cloned()?;

    let (action, error) = match field.restrictions.with_bound(bound, &text) {
        Ok(restrictions) => (Some(Action::SetRestrictions { id, restrictions }), None),
        Err(err) => {
            tracing::debug!(field = %id, %bound, error = %err, "bound input does not parse");
            (None, Some(bound_error_text(err)))
        }
    };

    state.ui.drafts.insert(
        (id, bound),
        BoundDraft {
            kind: field.kind,
            text,
            error,
        },
    );
    action
}

fn bound_error_text(err: ModelError) -> String {
    match err {
        ModelError::InvalidBound { reason, .. } => reason,
        other => other.to_string(),
    }
}

/// Dispatch an action and turn the emitted effects into tasks.
///
/// A dispatch error is shown in the error banner.
pub fn dispatch(state: &mut EditorState, action: Action) -> Task<Message> {
    let result = state.store.dispatch(action);
    state.ui.prune_drafts(state.store.state());

    match result {
        Ok(outcome) => Task::batch(outcome.effects.into_iter().map(effect_task)),
        Err(err) => {
            tracing::error!(error = %err, "dispatch failed");
            state.error = Some(EditorError::from(err));
            Task::none()
        }
    }
}

fn effect_task(effect: Effect) -> Task<Message> {
    match effect {
        Effect::Notify(notice) => Task::done(Message::Notice(NoticeMessage::Show(notice))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use profile_model::{FieldKind, Restrictions};

    fn handle(state: &mut EditorState, msg: ProfileMessage) {
        let _ = ProfileHandler.handle(state, msg);
    }

    fn editor_with(n: usize) -> EditorState {
        let mut state = EditorState::new(Settings::default());
        for _ in 0..n {
            handle(&mut state, ProfileMessage::AddFieldClicked);
        }
        state
    }

    fn ids(state: &EditorState) -> Vec<u64> {
        state.store.state().fields().iter().map(|f| f.id.0).collect()
    }

    #[test]
    fn test_add_field_clicked_appends_field() {
        let state = editor_with(2);
        assert_eq!(ids(&state), vec![1, 2]);
        assert!(
            state
                .store
                .state()
                .fields()
                .iter()
                .all(|f| f.kind == FieldKind::Unclassified)
        );
    }

    #[test]
    fn test_move_earlier_and_later() {
        let mut state = editor_with(3);

        handle(&mut state, ProfileMessage::MoveEarlier(FieldId(1)));
        assert_eq!(ids(&state), vec![1, 2, 3]);

        handle(&mut state, ProfileMessage::MoveLater(FieldId(1)));
        assert_eq!(ids(&state), vec![2, 1, 3]);

        handle(&mut state, ProfileMessage::MoveLater(FieldId(3)));
        assert_eq!(ids(&state), vec![2, 1, 3]);

        handle(&mut state, ProfileMessage::MoveEarlier(FieldId(3)));
        assert_eq!(ids(&state), vec![2, 3, 1]);
    }

    #[test]
    fn test_nullable_toggles() {
        let mut state = editor_with(1);
        handle(&mut state, ProfileMessage::NullableToggled(FieldId(1)));
        assert!(state.store.state().fields()[0].nullable);
        handle(&mut state, ProfileMessage::NullableToggled(FieldId(1)));
        assert!(!state.store.state().fields()[0].nullable);
    }

    #[test]
    fn test_valid_bound_is_dispatched() {
        let mut state = editor_with(1);
        handle(
            &mut state,
            ProfileMessage::KindSelected(FieldId(1), FieldKind::Numeric),
        );
        handle(
            &mut state,
            ProfileMessage::BoundChanged {
                id: FieldId(1),
                bound: Bound::Upper,
                text: "10.5".into(),
            },
        );

        assert_eq!(
            state.store.state().fields()[0].restrictions,
            Restrictions::Numeric {
                greater_than: None,
                less_than: Some(10.5),
            }
        );
        assert_eq!(state.ui.bound_error(FieldId(1), Bound::Upper), None);
    }

    #[test]
    fn test_invalid_bound_keeps_draft_and_state() {
        let mut state = editor_with(1);
        handle(
            &mut state,
            ProfileMessage::KindSelected(FieldId(1), FieldKind::Temporal),
        );
        let before = std::sync::Arc::clone(state.store.state());

        handle(
            &mut state,
            ProfileMessage::BoundChanged {
                id: FieldId(1),
                bound: Bound::Lower,
                text: "2019-0".into(),
            },
        );

        assert!(std::sync::Arc::ptr_eq(&before, state.store.state()));
        let field = &state.store.state().fields()[0];
        assert_eq!(state.ui.bound_text(field, Bound::Lower), "2019-0");
        assert!(state.ui.bound_error(FieldId(1), Bound::Lower).is_some());
    }

    #[test]
    fn test_kind_change_discards_drafts() {
        let mut state = editor_with(1);
        handle(
            &mut state,
            ProfileMessage::KindSelected(FieldId(1), FieldKind::String),
        );
        handle(
            &mut state,
            ProfileMessage::BoundChanged {
                id: FieldId(1),
                bound: Bound::Lower,
                text: "x".into(),
            },
        );
        assert_eq!(state.ui.drafts.len(), 1);

        handle(
            &mut state,
            ProfileMessage::KindSelected(FieldId(1), FieldKind::Numeric),
        );
        assert!(state.ui.drafts.is_empty());
    }

    #[test]
    fn test_remove_discards_drafts() {
        let mut state = editor_with(2);
        handle(
            &mut state,
            ProfileMessage::KindSelected(FieldId(2), FieldKind::Numeric),
        );
        handle(
            &mut state,
            ProfileMessage::BoundChanged {
                id: FieldId(2),
                bound: Bound::Lower,
                text: "1".into(),
            },
        );
        handle(&mut state, ProfileMessage::RemoveClicked(FieldId(2)));

        assert_eq!(ids(&state), vec![1]);
        assert!(state.ui.drafts.is_empty());
    }

    #[test]
    fn test_messages_for_missing_fields_change_nothing() {
        let mut state = editor_with(1);
        let before = std::sync::Arc::clone(state.store.state());

        handle(&mut state, ProfileMessage::NullableToggled(FieldId(9)));
        handle(&mut state, ProfileMessage::MoveLater(FieldId(9)));
        handle(
            &mut state,
            ProfileMessage::BoundChanged {
                id: FieldId(9),
                bound: Bound::Lower,
                text: "1".into(),
            },
        );

        assert!(std::sync::Arc::ptr_eq(&before, state.store.state()));
        assert!(state.ui.drafts.is_empty());
    }
}
