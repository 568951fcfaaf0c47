//! Property tests for the reducer.

use std::sync::Arc;

use proptest::prelude::*;

use profile_model::{AppState, FieldId, FieldKind, Restrictions};
use profile_store::{Action, reduce};

fn kind() -> impl Strategy<Value = FieldKind> {
    prop::sample::select(FieldKind::ALL.to_vec())
}

fn restrictions() -> impl Strategy<Value = Restrictions> {
    prop_oneof![
        Just(Restrictions::Unclassified),
        (proptest::option::of(0u32..50), proptest::option::of(0u32..50)).prop_map(
            |(longer_than, shorter_than)| Restrictions::String {
                longer_than,
                shorter_than,
            }
        ),
        (
            proptest::option::of(-1e6f64..1e6),
            proptest::option::of(-1e6f64..1e6)
        )
            .prop_map(|(greater_than, less_than)| Restrictions::Numeric {
                greater_than,
                less_than,
            }),
    ]
}

/// Actions that never reorder. Ids range past the fields that exist so that
/// inapplicable actions are generated too.
fn non_reorder_action() -> impl Strategy<Value = Action> {
    let id = (1u64..12).prop_map(FieldId);
    prop_oneof![
        Just(Action::AddField),
        id.clone().prop_map(|id| Action::RemoveField { id }),
        (id.clone(), "[a-z]{0,6}").prop_map(|(id, name)| Action::RenameField { id, name }),
        (id.clone(), kind()).prop_map(|(id, kind)| Action::SetFieldKind { id, kind }),
        (id.clone(), any::<bool>()).prop_map(|(id, nullable)| Action::SetNullable { id, nullable }),
        (id, restrictions())
            .prop_map(|(id, restrictions)| Action::SetRestrictions { id, restrictions }),
    ]
}

fn build_state(adds: usize) -> Arc<AppState> {
    let mut state = Arc::new(AppState::default());
    for _ in 0..adds {
        state = reduce(&state, &Action::AddField);
    }
    state
}

/// Whether `sub` appears in `seq` in the same relative order.
fn is_subsequence(sub: &[FieldId], seq: &[FieldId]) -> bool {
    let mut it = seq.iter();
    sub.iter().all(|id| it.any(|other| other == id))
}

proptest! {
    #[test]
    fn order_of_surviving_fields_is_preserved(
        adds in 0usize..8,
        actions in prop::collection::vec(non_reorder_action(), 0..24),
    ) {
        let mut state = build_state(adds);
        for action in &actions {
            let next = reduce(&state, action);
            let before = state.current_profile.ids();
            let after = next.current_profile.ids();
            let surviving: Vec<FieldId> =
                before.iter().copied().filter(|id| after.contains(id)).collect();
            let previous_in_after: Vec<FieldId> =
                after.iter().copied().filter(|id| before.contains(id)).collect();
            prop_assert_eq!(&surviving, &previous_in_after);
            prop_assert!(is_subsequence(&surviving, &after));
            state = next;
        }
    }

    #[test]
    fn add_field_grows_by_one_with_default_kind(adds in 0usize..10) {
        let state = build_state(adds);
        let next = reduce(&state, &Action::AddField);
        prop_assert_eq!(next.fields().len(), state.fields().len() + 1);
        prop_assert_eq!(next.fields().last().map(|f| f.kind), Some(FieldKind::default()));
    }

    #[test]
    fn actions_on_missing_fields_return_same_state(
        adds in 0usize..5,
        action in non_reorder_action(),
    ) {
        let state = build_state(adds);
        if let Some(id) = action.target() {
            if state.field(id).is_none() {
                let next = reduce(&state, &action);
                prop_assert!(Arc::ptr_eq(&state, &next));
            }
        }
    }

    #[test]
    fn reduce_is_deterministic(
        adds in 0usize..6,
        action in non_reorder_action(),
    ) {
        let state = build_state(adds);
        let a = reduce(&state, &action);
        let b = reduce(&state, &action);
        prop_assert_eq!(&*a, &*b);
    }
}
