//! Application state management.
//!
//! - **EditorState**: root state owning the store, settings and UI state
//! - **UiState**: view-only state (input drafts, notice, panels), never
//!   dispatched through the store

mod editor_state;
mod ui_state;

pub use editor_state::EditorState;
pub use ui_state::{BoundDraft, UiState};
