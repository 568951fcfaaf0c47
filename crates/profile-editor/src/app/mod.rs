//! Main application module.
//!
//! Implements the Elm architecture on top of the profile store: messages are
//! routed to handlers, handlers dispatch actions, and the view is rebuilt
//! from the store's current state.

mod subscription;

use iced::keyboard;
use iced::{Element, Subscription, Task, Theme};
use profile_store::Action;

use crate::component::NoticeMessage;
use crate::error::EditorError;
use crate::handler::{MessageHandler, ProfileHandler, dispatch};
use crate::message::Message;
use crate::settings::Settings;
use crate::state::EditorState;
use crate::theme::editor_theme;

pub use subscription::NOTICE_TIMEOUT;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: EditorState,
}

impl App {
    /// Create the application.
    ///
    /// `load_error` is shown in the error banner, for settings that failed
    /// to load before the window opened.
    pub fn new(settings: Settings, load_error: Option<EditorError>) -> (Self, Task<Message>) {
        let mut state = EditorState::new(settings);
        if matches!(load_error, Some(EditorError::SettingsLoad { .. })) {
            state.persist_settings = false;
        }
        state.error = load_error;
        (Self { state }, Task::none())
    }

    /// Handle a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Profile(msg) => ProfileHandler.handle(&mut self.state, msg),

            Message::Notice(NoticeMessage::Show(notice)) => {
                self.state.ui.show_notice(notice);
                Task::none()
            }

            Message::Notice(NoticeMessage::Expire(sequence)) => {
                self.state.ui.expire_notice(sequence);
                Task::none()
            }

            Message::Notice(NoticeMessage::Dismiss) => {
                self.state.ui.notice = None;
                Task::none()
            }

            Message::ToggleHistory => {
                let show = !self.state.ui.show_history;
                self.state.ui.show_history = show;
                self.state.settings.editor.show_history = show;
                if !self.state.persist_settings {
                    tracing::debug!("settings file failed to load, not saving");
                } else if let Err(err) = self.state.save_settings() {
                    tracing::warn!(error = %err, "could not persist history panel state");
                    self.state.error = Some(err);
                }
                Task::none()
            }

            Message::DismissError => {
                self.state.error = None;
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key(&key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    /// Global keyboard shortcuts.
    fn handle_key(&mut self, key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        use keyboard::key::Named;

        match key.as_ref() {
            keyboard::Key::Character("n") if modifiers.command() => {
                dispatch(&mut self.state, Action::AddField)
            }
            keyboard::Key::Character("h") if modifiers.command() => {
                self.update(Message::ToggleHistory)
            }
            keyboard::Key::Named(Named::Escape) if self.state.error.is_some() => {
                self.update(Message::DismissError)
            }
            keyboard::Key::Named(Named::Escape) if self.state.ui.notice.is_some() => {
                self.update(Message::Notice(NoticeMessage::Dismiss))
            }
            _ => Task::none(),
        }
    }

    /// Render the window.
    pub fn view(&self) -> Element<'_, Message> {
        crate::view::view_editor(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        match self.state.store.state().fields().len() {
            1 => "Profile Editor (1 field)".to_string(),
            n => format!("Profile Editor ({n} fields)"),
        }
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        editor_theme(self.state.settings.window.theme)
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Notice, NoticeLevel};
    use crate::message::ProfileMessage;
    use profile_store::{MAX_FOLLOW_UPS, StoreError};

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = App::new(Settings::default(), None);
        app.state.settings_path = dir.path().join("settings.toml");
        (app, dir)
    }

    #[test]
    fn test_title_counts_fields() {
        let (mut app, _dir) = app();
        assert_eq!(app.title(), "Profile Editor (0 fields)");
        let _ = app.update(Message::Profile(ProfileMessage::AddFieldClicked));
        assert_eq!(app.title(), "Profile Editor (1 field)");
    }

    #[test]
    fn test_shortcut_adds_field() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Character("n".into()),
            keyboard::Modifiers::COMMAND,
        ));
        assert_eq!(app.state.store.state().fields().len(), 1);

        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Character("n".into()),
            keyboard::Modifiers::empty(),
        ));
        assert_eq!(app.state.store.state().fields().len(), 1);
    }

    #[test]
    fn test_toggle_history_persists_setting() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::ToggleHistory);

        assert!(app.state.ui.show_history);
        let saved = Settings::try_load_from(&app.state.settings_path).unwrap();
        assert!(saved.editor.show_history);
        assert!(app.state.error.is_none());
    }

    #[test]
    fn test_notice_show_and_dismiss() {
        let (mut app, _dir) = app();
        let notice = Notice::new("Added email", NoticeLevel::Success);
        let _ = app.update(Message::Notice(NoticeMessage::Show(notice.clone())));
        assert_eq!(app.state.ui.notice, Some(notice));

        let _ = app.update(Message::Notice(NoticeMessage::Dismiss));
        assert!(app.state.ui.notice.is_none());
    }

    #[test]
    fn test_toggle_history_keeps_unreadable_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let malformed = "[editor\ngrid_columns = ";
        std::fs::write(&path, malformed).unwrap();
        let err = Settings::try_load_from(&path).unwrap_err();

        let (mut app, _) = App::new(Settings::default(), Some(err));
        app.state.settings_path = path.clone();
        let _ = app.update(Message::ToggleHistory);
        let _ = app.update(Message::DismissError);
        let _ = app.update(Message::ToggleHistory);

        assert!(!app.state.ui.show_history);
        assert!(app.state.error.is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), malformed);
    }

    #[test]
    fn test_stale_expiry_keeps_replacement_notice() {
        let (mut app, _dir) = app();
        let first = Notice::new("Added email", NoticeLevel::Success);
        let second = Notice::new("Removed email", NoticeLevel::Info);

        let _ = app.update(Message::Notice(NoticeMessage::Show(first)));
        let stale = app.state.ui.notice_sequence;
        let _ = app.update(Message::Notice(NoticeMessage::Show(second.clone())));

        let _ = app.update(Message::Notice(NoticeMessage::Expire(stale)));
        assert_eq!(app.state.ui.notice, Some(second));

        let current = app.state.ui.notice_sequence;
        let _ = app.update(Message::Notice(NoticeMessage::Expire(current)));
        assert!(app.state.ui.notice.is_none());
    }

    #[test]
    fn test_load_error_is_shown_and_dismissed() {
        let err = EditorError::from(StoreError::FollowUpLimit {
            limit: MAX_FOLLOW_UPS,
        });
        let (mut app, _) = App::new(Settings::default(), Some(err));
        assert!(app.state.error.is_some());

        let _ = app.update(Message::DismissError);
        assert!(app.state.error.is_none());
    }
}
