//! Theme module for the Profile Editor.
//!
//! - Spacing constants (`spacing`)
//! - Widget style functions (`style`)
//!
//! Style functions read colors from the active Iced theme's extended palette,
//! so they work in both light and dark mode.
//!
//! ```rust,ignore
//! use profile_editor::theme::{button_primary, SPACING_MD};
//!
//! button(text("Add field")).style(button_primary).padding(SPACING_MD)
//! ```

pub mod spacing;
pub mod style;

pub use spacing::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, HISTORY_WIDTH,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};
pub use style::{
    button_danger, button_ghost, button_primary, button_secondary, container_banner,
    container_card, container_panel, text_input_default, text_muted,
};

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Create the Iced theme for a mode.
pub fn editor_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
    }
}
