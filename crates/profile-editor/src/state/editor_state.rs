//! Root editor state.

use std::path::PathBuf;

use profile_model::AppState;
use profile_store::{LoggingMiddleware, Store};

use crate::effect::{Effect, SideEffects};
use crate::error::EditorError;
use crate::settings::Settings;
use crate::state::UiState;

/// Everything the editor window holds.
///
/// Profile data lives in the store and only changes through
/// [`Store::dispatch`]. Everything else here is presentation state.
#[derive(Debug)]
pub struct EditorState {
    /// Profile state container.
    pub store: Store<Effect>,
    /// Loaded settings.
    pub settings: Settings,
    /// Where settings are saved.
    pub settings_path: PathBuf,
    /// UI-only state.
    pub ui: UiState,
    /// Error shown in the banner.
    pub error: Option<EditorError>,
    /// Cleared when the settings file exists but could not be loaded, so
    /// the file is never overwritten with defaults.
    pub persist_settings: bool,
}

impl EditorState {
    /// Create state with an empty profile.
    pub fn new(settings: Settings) -> Self {
        let store = Store::new(AppState::default())
            .with_middleware(LoggingMiddleware)
            .with_middleware(SideEffects)
            .with_history(settings.editor.history_capacity);

        let ui = UiState {
            show_history: settings.editor.show_history,
            ..UiState::default()
        };

        Self {
            store,
            settings,
            settings_path: Settings::config_path(),
            ui,
            error: None,
            persist_settings: true,
        }
    }

    /// Save settings to `settings_path`.
    pub fn save_settings(&self) -> Result<(), EditorError> {
        self.settings.save_to(&self.settings_path)
    }
}
