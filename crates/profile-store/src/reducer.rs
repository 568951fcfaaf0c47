//! The reducer: a pure function from `(state, action)` to the next state.
//!
//! Change detection is by pointer: when an action does not apply (unknown
//! field, value already set, restrictions of the wrong kind, move to the same
//! index) the input `Arc` is returned as is. Otherwise a new `AppState` is
//! built; fields the action did not touch keep their `Arc`.

use std::sync::Arc;

use profile_model::{AppState, Field, FieldId, Profile};

use crate::action::Action;

/// Apply an action to a state.
pub fn reduce(state: &Arc<AppState>, action: &Action) -> Arc<AppState> {
    match action {
        Action::AddField => add_field(state),

        Action::RemoveField { id } => {
            let Some(index) = state.position(*id) else {
                return Arc::clone(state);
            };
            let mut fields = state.fields().to_vec();
            fields.remove(index);
            with_fields(state, fields)
        }

        Action::RenameField { id, name } => update_field(state, *id, |field| {
            (field.name != *name).then(|| field.with_name(name.clone()))
        }),

        Action::SetFieldKind { id, kind } => update_field(state, *id, |field| {
            (field.kind != *kind).then(|| field.with_kind(*kind))
        }),

        Action::SetNullable { id, nullable } => update_field(state, *id, |field| {
            (field.nullable != *nullable).then(|| field.with_nullable(*nullable))
        }),

        Action::SetRestrictions { id, restrictions } => update_field(state, *id, |field| {
            if field.restrictions == *restrictions {
                return None;
            }
            field.with_restrictions(restrictions.clone()).ok()
        }),

        Action::MoveField { id, to } => move_field(state, *id, *to),
    }
}

fn add_field(state: &Arc<AppState>) -> Arc<AppState> {
    let id = FieldId(state.next_field_id);
    let mut fields = state.fields().to_vec();
    fields.push(Arc::new(Field::blank(id)));
    Arc::new(AppState {
        current_profile: Arc::new(Profile { fields }),
        next_field_id: state.next_field_id + 1,
    })
}

fn move_field(state: &Arc<AppState>, id: FieldId, to: usize) -> Arc<AppState> {
    let Some(from) = state.position(id) else {
        return Arc::clone(state);
    };
    let to = to.min(state.fields().len() - 1);
    if from == to {
        return Arc::clone(state);
    }
    let mut fields = state.fields().to_vec();
    let field = fields.remove(from);
    fields.insert(to, field);
    with_fields(state, fields)
}

/// Replace one field with the result of `edit`, or keep the state when the
/// field is missing or `edit` returns `None`.
fn update_field(
    state: &Arc<AppState>,
    id: FieldId,
    edit: impl FnOnce(&Field) -> Option<Field>,
) -> Arc<AppState> {
    let Some(index) = state.position(id) else {
        return Arc::clone(state);
    };
    let Some(updated) = edit(&state.fields()[index]) else {
        return Arc::clone(state);
    };
    let mut fields = state.fields().to_vec();
    fields[index] = Arc::new(updated);
    with_fields(state, fields)
}

fn with_fields(state: &AppState, fields: Vec<Arc<Field>>) -> Arc<AppState> {
    Arc::new(AppState {
        current_profile: Arc::new(Profile { fields }),
        next_field_id: state.next_field_id,
    })
}
