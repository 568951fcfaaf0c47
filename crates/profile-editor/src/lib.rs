//! Profile Editor - desktop form editor for typed field profiles.
//!
//! Built with Iced 0.14 using the Elm architecture. Profile data is held in a
//! [`profile_store::Store`]; the GUI turns messages into store actions and
//! renders the resulting state.
//!
//! # Module Organization
//!
//! - [`app`]: application entry (update, view, subscriptions)
//! - [`component`]: reusable widgets, including the grid [`component::ProfileEditor`]
//! - [`effect`]: middleware that emits user-facing notices
//! - [`error`]: editor error type
//! - [`handler`]: message handlers
//! - [`message`]: message hierarchy
//! - [`settings`]: persisted preferences
//! - [`state`]: editor and UI state
//! - [`theme`]: spacing and widget styles
//! - [`view`]: window layout

pub mod app;
pub mod component;
pub mod effect;
pub mod error;
pub mod handler;
pub mod message;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::EditorError;
pub use settings::Settings;
