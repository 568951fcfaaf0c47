//! Integration tests for the dispatch pipeline.

use std::sync::{Arc, Mutex};

use profile_model::{AppState, FieldId, FieldKind};
use profile_store::{
    Action, Effects, LoggingMiddleware, MAX_FOLLOW_UPS, Middleware, Store, StoreError,
    Transition,
};

/// Records hook calls into a shared log.
struct Recorder {
    label: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl Middleware<String> for Recorder {
    fn name(&self) -> &'static str {
        self.label
    }

    fn before(&mut self, state: &AppState, action: &Action) {
        self.log.lock().unwrap().push(format!(
            "{}:before:{}:{}",
            self.label,
            action.name(),
            state.fields().len()
        ));
    }

    fn after(&mut self, transition: &Transition<'_>, effects: &mut Effects<String>) {
        self.log.lock().unwrap().push(format!(
            "{}:after:{}:{}",
            self.label,
            transition.action.name(),
            transition.next.fields().len()
        ));
        effects.emit(format!("{}:{}", self.label, transition.action.name()));
    }
}

/// Gives every newly added field the numeric kind.
struct NumericByDefault;

impl Middleware<String> for NumericByDefault {
    fn name(&self) -> &'static str {
        "numeric-by-default"
    }

    fn after(&mut self, transition: &Transition<'_>, effects: &mut Effects<String>) {
        if matches!(transition.action, Action::AddField) && transition.changed() {
            if let Some(field) = transition.next.fields().last() {
                effects.dispatch(Action::SetFieldKind {
                    id: field.id,
                    kind: FieldKind::Numeric,
                });
            }
        }
    }
}

/// Queues another add for every add.
struct Runaway;

impl Middleware<()> for Runaway {
    fn name(&self) -> &'static str {
        "runaway"
    }

    fn after(&mut self, transition: &Transition<'_>, effects: &mut Effects<()>) {
        if matches!(transition.action, Action::AddField) {
            effects.dispatch(Action::AddField);
        }
    }
}

#[test]
fn middleware_runs_in_registration_order_around_reducer() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut store = Store::new(AppState::default())
        .with_middleware(Recorder {
            label: "a",
            log: Arc::clone(&log),
        })
        .with_middleware(Recorder {
            label: "b",
            log: Arc::clone(&log),
        });

    let outcome = store.dispatch(Action::AddField).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "a:before:add_field:0",
            "b:before:add_field:0",
            "a:after:add_field:1",
            "b:after:add_field:1",
        ]
    );
    assert_eq!(outcome.effects, vec!["a:add_field", "b:add_field"]);
    assert!(outcome.changed);
    assert_eq!(outcome.steps, 1);
}

#[test]
fn follow_up_actions_run_in_same_dispatch() {
    let mut store = Store::new(AppState::default())
        .with_middleware(LoggingMiddleware)
        .with_middleware(NumericByDefault);

    let outcome = store.dispatch(Action::AddField).unwrap();

    assert_eq!(outcome.steps, 2);
    assert_eq!(store.state().fields().len(), 1);
    assert_eq!(store.state().fields()[0].kind, FieldKind::Numeric);
}

#[test]
fn listeners_only_see_changes() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut store: Store<()> = Store::new(AppState::default());
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |state| sink.lock().unwrap().push(state.fields().len()));

    store.dispatch(Action::AddField).unwrap();
    store
        .dispatch(Action::RemoveField { id: FieldId(42) })
        .unwrap();
    store.dispatch(Action::AddField).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(Action::AddField).unwrap();
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn noop_dispatch_keeps_state_pointer() {
    let mut store: Store<()> = Store::new(AppState::default());
    store.dispatch(Action::AddField).unwrap();
    let before = Arc::clone(store.state());

    let outcome = store
        .dispatch(Action::RenameField {
            id: FieldId(7),
            name: "missing".into(),
        })
        .unwrap();

    assert!(!outcome.changed);
    assert!(Arc::ptr_eq(&before, store.state()));
}

#[test]
fn runaway_follow_ups_hit_the_limit() {
    let mut store = Store::new(AppState::default()).with_middleware(Runaway);

    let err = store.dispatch(Action::AddField).unwrap_err();

    assert_eq!(
        err,
        StoreError::FollowUpLimit {
            limit: MAX_FOLLOW_UPS
        }
    );
    // The original action plus every allowed follow-up was applied.
    assert_eq!(store.state().fields().len(), MAX_FOLLOW_UPS + 1);
}

#[test]
fn history_records_every_step() {
    let mut store = Store::new(AppState::default())
        .with_middleware(NumericByDefault)
        .with_history(10);

    store.dispatch(Action::AddField).unwrap();
    store
        .dispatch(Action::SetNullable {
            id: FieldId(99),
            nullable: true,
        })
        .unwrap();

    let history = store.history().unwrap();
    let names: Vec<(&str, bool)> = history
        .entries()
        .map(|e| (e.action.name(), e.changed))
        .collect();
    assert_eq!(
        names,
        vec![
            ("add_field", true),
            ("set_field_kind", true),
            ("set_nullable", false),
        ]
    );
    assert_eq!(history.total(), 3);
}

#[test]
fn add_field_from_empty_state() {
    let mut store: Store<()> = Store::new(AppState::default());
    assert!(store.state().fields().is_empty());

    store.dispatch(Action::AddField).unwrap();

    let fields = store.state().fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].kind, FieldKind::Unclassified);
}
