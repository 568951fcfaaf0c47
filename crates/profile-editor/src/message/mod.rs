//! Message module for the Profile Editor.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod profile;

use iced::keyboard;

use crate::component::NoticeMessage;

pub use profile::ProfileMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Profile editing
    Profile(ProfileMessage),

    // =========================================================================
    // Chrome
    // =========================================================================
    /// Transient notices
    Notice(NoticeMessage),

    /// Show or hide the action history panel
    ToggleHistory,

    /// Close the error banner
    DismissError,

    // =========================================================================
    // System events
    // =========================================================================
    /// Keyboard event (for shortcuts)
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation
    Noop,
}
