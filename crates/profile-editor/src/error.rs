//! Editor error types.
//!
//! Errors here are shown to the user in the banner at the top of the window,
//! together with a suggestion when one applies.

use std::path::Path;

use profile_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the editor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditorError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Settings file exists but could not be read or parsed.
    #[error("Failed to load settings from {path}: {reason}")]
    SettingsLoad {
        /// Settings file path.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// Settings could not be written.
    #[error("Failed to save settings to {path}: {reason}")]
    SettingsSave {
        /// Settings file path.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // STORE
    // =========================================================================
    /// A dispatch failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditorError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => {
                Some("Defaults are in use. Fix or delete the settings file to silence this.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Store(_) => Some("The last edit was only partly applied. Review the profile."),
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a settings load error.
    pub fn settings_load(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::SettingsLoad {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create a settings save error.
    pub fn settings_save(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}
