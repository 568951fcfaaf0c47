//! Notice component.
//!
//! A transient notification shown at the bottom of the window. The app
//! subscription dismisses it after a timeout.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_MD, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost};

/// Notice content.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Text shown to the user.
    pub message: String,
    /// Determines the icon and its color.
    pub level: NoticeLevel,
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
}

impl Notice {
    pub fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }
}

/// Notice events.
#[derive(Debug, Clone)]
pub enum NoticeMessage {
    /// Show a notice, replacing the current one.
    Show(Notice),
    /// Hide the current notice.
    Dismiss,
    /// Timeout for the notice shown with this sequence number.
    Expire(u64),
}

/// Renders a notice.
///
/// `on_dismiss` is sent when the close button is pressed.
pub fn view_notice<'a, M: Clone + 'a>(notice: &'a Notice, on_dismiss: M) -> Element<'a, M> {
    let level = notice.level;
    let icon_color = move |theme: &Theme| {
        let palette = theme.extended_palette();
        match level {
            NoticeLevel::Success => palette.success.base.color,
            NoticeLevel::Info => palette.primary.base.color,
        }
    };

    let icon = match level {
        NoticeLevel::Success => lucide::circle_check(),
        NoticeLevel::Info => lucide::info(),
    }
    .size(18)
    .style(move |theme: &Theme| text::Style {
        color: Some(icon_color(theme)),
    });

    let dismiss = button(lucide::x().size(14))
        .on_press(on_dismiss)
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        text(&notice.message).size(14),
        Space::new().width(SPACING_SM),
        dismiss,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                text_color: Some(palette.background.weak.text),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: BORDER_RADIUS_MD.into(),
                },
                shadow: Shadow {
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        })
        .into()
}
