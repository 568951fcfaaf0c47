//! Application subscriptions.
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Global keyboard shortcuts |
//! | Notice Dismiss | 4 seconds | Notice visible | Auto-dismiss notices |

use std::time::Duration;

use iced::Subscription;
use iced::keyboard;
use iced::time;

use crate::component::NoticeMessage;
use crate::message::Message;
use crate::state::EditorState;

/// How long a notice stays visible.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

/// Create all application subscriptions.
pub fn create_subscription(state: &EditorState) -> Subscription<Message> {
    Subscription::batch([keyboard_subscription(), notice_subscription(state)])
}

/// Keyboard event subscription.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Notice auto-dismiss subscription. Inactive when no notice is shown.
///
/// Keyed by the notice sequence, so showing a new notice restarts the timer.
fn notice_subscription(state: &EditorState) -> Subscription<Message> {
    if state.ui.notice.is_some() {
        time::every(NOTICE_TIMEOUT)
            .with(state.ui.notice_sequence)
            .map(|(sequence, _)| Message::Notice(NoticeMessage::Expire(sequence)))
    } else {
        Subscription::none()
    }
}
