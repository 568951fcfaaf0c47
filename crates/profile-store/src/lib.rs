//! Unidirectional state container for the profile editor.
//!
//! State flows one way: a view dispatches an [`Action`], the [`Store`] runs it
//! through its [`Middleware`] chain and the pure [`reduce`] function, and the
//! resulting [`AppState`](profile_model::AppState) replaces the previous one.
//!
//! # Module Organization
//!
//! - [`action`]: closed set of state changes
//! - [`reducer`]: pure `(state, action) -> state`
//! - [`middleware`]: interception layer for side effects and follow-up actions
//! - [`history`]: bounded log of dispatched actions
//! - [`store`]: owner of the current state and the dispatch loop
//!
//! # Example
//!
//! ```
//! use profile_store::{Action, Store};
//! use profile_model::AppState;
//!
//! let mut store: Store<()> = Store::new(AppState::default());
//! let outcome = store.dispatch(Action::AddField).unwrap();
//! assert!(outcome.changed);
//! assert_eq!(store.state().fields().len(), 1);
//! ```

pub mod action;
pub mod error;
pub mod history;
pub mod middleware;
pub mod reducer;
pub mod store;

pub use action::Action;
pub use error::StoreError;
pub use history::{ActionHistory, HistoryEntry};
pub use middleware::{Effects, LoggingMiddleware, Middleware, Transition};
pub use reducer::reduce;
pub use store::{Dispatched, ListenerId, MAX_FOLLOW_UPS, Store};
