//! Application settings - persisted user preferences.
//!
//! Settings are loaded from `settings.toml` in the user's config directory at
//! startup and saved when a persisted preference changes. Every section and
//! key is optional; missing keys take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::theme::ThemeMode;

/// Smallest and largest accepted `editor.grid_columns`.
pub const GRID_COLUMNS_RANGE: (usize, usize) = (1, 6);

/// Largest accepted `editor.history_capacity`.
pub const MAX_HISTORY_CAPACITY: usize = 1000;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Editor layout and history.
    pub editor: EditorSettings,

    /// Window size and appearance.
    pub window: WindowSettings,

    /// Log output.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// an error.
    pub fn try_load() -> Result<Self, EditorError> {
        Self::try_load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn try_load_from(path: &Path) -> Result<Self, EditorError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(EditorError::settings_load(path, err)),
        };

        let mut settings: Self =
            toml::from_str(&content).map_err(|err| EditorError::settings_load(path, err))?;
        settings.normalize();
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Clamp out-of-range values.
    fn normalize(&mut self) {
        let (min, max) = GRID_COLUMNS_RANGE;
        if !(min..=max).contains(&self.editor.grid_columns) {
            let clamped = self.editor.grid_columns.clamp(min, max);
            tracing::warn!(
                configured = self.editor.grid_columns,
                using = clamped,
                "grid_columns out of range"
            );
            self.editor.grid_columns = clamped;
        }
        if self.editor.history_capacity > MAX_HISTORY_CAPACITY {
            tracing::warn!(
                configured = self.editor.history_capacity,
                using = MAX_HISTORY_CAPACITY,
                "history_capacity too large"
            );
            self.editor.history_capacity = MAX_HISTORY_CAPACITY;
        }
        if !is_window_extent(self.window.width) || !is_window_extent(self.window.height) {
            tracing::warn!(
                width = self.window.width,
                height = self.window.height,
                "invalid window size, using defaults"
            );
            self.window = WindowSettings {
                theme: self.window.theme,
                ..WindowSettings::default()
            };
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), EditorError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EditorError::settings_save(path, e))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| EditorError::settings_save(path, e))?;

        std::fs::write(path, content).map_err(|e| EditorError::settings_save(path, e))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ProfileEditor", "ProfileEditor")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

fn is_window_extent(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Field editor cards per grid row.
    pub grid_columns: usize,

    /// Number of actions kept in the history panel.
    pub history_capacity: usize,

    /// Whether the history panel is open at startup.
    pub show_history: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_columns: 3,
            history_capacity: 50,
            show_history: false,
        }
    }
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Initial width in logical pixels.
    pub width: f32,

    /// Initial height in logical pixels.
    pub height: f32,

    /// Light or dark appearance.
    pub theme: ThemeMode,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 720.0,
            theme: ThemeMode::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` overrides it.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
