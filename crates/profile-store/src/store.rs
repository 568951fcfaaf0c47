//! The store: owner of the current state.
//!
//! [`Store::dispatch`] is the only way to change state. It processes the
//! dispatched action, then any follow-up actions queued by middleware, one at
//! a time in FIFO order. Each step runs `before` hooks, the reducer, `after`
//! hooks, records history, and notifies listeners if the state changed.

use std::collections::VecDeque;
use std::sync::Arc;

use profile_model::AppState;

use crate::action::Action;
use crate::error::StoreError;
use crate::history::ActionHistory;
use crate::middleware::{Effects, Middleware, Transition};
use crate::reducer::reduce;

/// Maximum follow-up actions processed for a single dispatch.
pub const MAX_FOLLOW_UPS: usize = 64;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&AppState) + Send>;

/// Result of a successful dispatch.
#[derive(Debug)]
pub struct Dispatched<E> {
    /// Whether any step produced a new state.
    pub changed: bool,
    /// Number of reducer steps run (the action plus its follow-ups).
    pub steps: usize,
    /// Effects emitted by middleware, in emission order.
    pub effects: Vec<E>,
}

/// State container.
pub struct Store<E> {
    state: Arc<AppState>,
    middleware: Vec<Box<dyn Middleware<E>>>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    history: Option<ActionHistory>,
}

impl<E> std::fmt::Debug for Store<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field(
                "middleware",
                &self.middleware.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .field("listeners", &self.listeners.len())
            .field("history", &self.history.as_ref().map(ActionHistory::len))
            .finish()
    }
}

impl<E> Store<E> {
    /// Create a store holding `initial`.
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Arc::new(initial),
            middleware: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
            history: None,
        }
    }

    /// Register middleware (builder form).
    pub fn with_middleware(mut self, middleware: impl Middleware<E> + 'static) -> Self {
        self.add_middleware(middleware);
        self
    }

    /// Register middleware. Runs after previously registered middleware.
    pub fn add_middleware(&mut self, middleware: impl Middleware<E> + 'static) {
        tracing::debug!(middleware = middleware.name(), "registered middleware");
        self.middleware.push(Box::new(middleware));
    }

    /// Keep a history of the last `capacity` actions.
    pub fn with_history(mut self, capacity: usize) -> Self {
        self.history = Some(ActionHistory::new(capacity));
        self
    }

    /// Current state.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Action history, if enabled.
    pub fn history(&self) -> Option<&ActionHistory> {
        self.history.as_ref()
    }

    /// Call `listener` with the new state after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Dispatch an action and every follow-up it causes.
    ///
    /// On [`StoreError::FollowUpLimit`] the state reached so far is kept and
    /// the effects collected so far are dropped.
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched<E>, StoreError> {
        let mut queue = VecDeque::from([action]);
        let mut emitted = Vec::new();
        let mut changed = false;
        let mut steps = 0;

        while let Some(action) = queue.pop_front() {
            if steps > MAX_FOLLOW_UPS {
                tracing::error!(
                    limit = MAX_FOLLOW_UPS,
                    pending = queue.len() + 1,
                    "follow-up limit reached"
                );
                return Err(StoreError::FollowUpLimit {
                    limit: MAX_FOLLOW_UPS,
                });
            }
            steps += 1;

            let effects = self.step(&action);
            changed |= effects.changed;
            queue.extend(effects.follow_ups);
            emitted.extend(effects.emitted);
        }

        Ok(Dispatched {
            changed,
            steps,
            effects: emitted,
        })
    }

    fn step(&mut self, action: &Action) -> Step<E> {
        for middleware in &mut self.middleware {
            middleware.before(&self.state, action);
        }

        let previous = Arc::clone(&self.state);
        let next = reduce(&previous, action);

        let mut effects = Effects::default();
        let transition = Transition {
            action,
            previous: &previous,
            next: &next,
        };
        for middleware in &mut self.middleware {
            middleware.after(&transition, &mut effects);
        }
        let changed = transition.changed();

        if let Some(history) = &mut self.history {
            history.record(action, changed, next.fields().len());
        }

        self.state = next;
        if changed {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }

        Step {
            changed,
            follow_ups: effects.follow_ups,
            emitted: effects.emitted,
        }
    }
}

struct Step<E> {
    changed: bool,
    follow_ups: Vec<Action>,
    emitted: Vec<E>,
}
