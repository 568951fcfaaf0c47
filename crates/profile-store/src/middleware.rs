//! Interception layer around the reducer.
//!
//! Middleware observes every action twice: [`Middleware::before`] sees the
//! state the action is about to be applied to, [`Middleware::after`] sees the
//! resulting [`Transition`]. Neither can touch the state. To cause further
//! changes, `after` queues follow-up actions through [`Effects::dispatch`];
//! anything outside the store (notifications, I/O) is requested through
//! [`Effects::emit`] and carried back to the caller of
//! [`Store::dispatch`](crate::Store::dispatch).
//!
//! The effect type `E` belongs to the caller. A headless caller can use `()`.

use std::sync::Arc;

use profile_model::AppState;

use crate::action::Action;

// =============================================================================
// TRANSITION
// =============================================================================

/// One reducer step.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    pub action: &'a Action,
    pub previous: &'a Arc<AppState>,
    pub next: &'a Arc<AppState>,
}

impl Transition<'_> {
    /// Whether the reducer produced a new state.
    pub fn changed(&self) -> bool {
        !Arc::ptr_eq(self.previous, self.next)
    }
}

// =============================================================================
// EFFECTS
// =============================================================================

/// Output collected from middleware during one reducer step.
#[derive(Debug)]
pub struct Effects<E> {
    pub(crate) follow_ups: Vec<Action>,
    pub(crate) emitted: Vec<E>,
}

impl<E> Default for Effects<E> {
    fn default() -> Self {
        Self {
            follow_ups: Vec::new(),
            emitted: Vec::new(),
        }
    }
}

impl<E> Effects<E> {
    /// Queue an action to run after the current one.
    pub fn dispatch(&mut self, action: Action) {
        self.follow_ups.push(action);
    }

    /// Request an effect outside the store.
    pub fn emit(&mut self, effect: E) {
        self.emitted.push(effect);
    }
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// A participant in the dispatch pipeline.
///
/// Middleware runs in registration order for both hooks.
pub trait Middleware<E>: Send {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Called before the reducer.
    fn before(&mut self, _state: &AppState, _action: &Action) {}

    /// Called after the reducer.
    fn after(&mut self, _transition: &Transition<'_>, _effects: &mut Effects<E>) {}
}

/// Traces every transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMiddleware;

impl<E> Middleware<E> for LoggingMiddleware {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn before(&mut self, state: &AppState, action: &Action) {
        tracing::trace!(
            action = action.name(),
            fields = state.fields().len(),
            "dispatching"
        );
    }

    fn after(&mut self, transition: &Transition<'_>, _effects: &mut Effects<E>) {
        let action = transition.action;
        if transition.changed() {
            tracing::debug!(
                action = action.name(),
                target = ?action.target(),
                fields = transition.next.fields().len(),
                "state changed"
            );
        } else {
            tracing::debug!(
                action = action.name(),
                target = ?action.target(),
                "action had no effect"
            );
        }
    }
}
