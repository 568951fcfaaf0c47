//! Action history panel.

use iced::widget::{Column, Space, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use profile_store::{ActionHistory, HistoryEntry};

use crate::message::Message;
use crate::theme::{
    HISTORY_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, container_panel, text_muted,
};

/// Render the history panel, newest action first.
pub fn view_history<'a>(history: Option<&ActionHistory>) -> Element<'a, Message> {
    let (total, entries): (u64, Vec<Element<'a, Message>>) = match history {
        Some(history) => (
            history.total(),
            history.recent(history.len()).map(view_entry).collect(),
        ),
        None => (0, Vec::new()),
    };

    let header = row![
        lucide::list().size(16),
        text("Action history").size(15),
        Space::new().width(Length::Fill),
        muted(format!("{total} total"), 12.0),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = if entries.is_empty() {
        muted("No actions yet".to_string(), 13.0).into()
    } else {
        scrollable(Column::with_children(entries).spacing(SPACING_XS))
            .height(Length::Fill)
            .into()
    };

    container(column![header, body].spacing(SPACING_MD))
        .padding(SPACING_MD)
        .width(HISTORY_WIDTH)
        .height(Length::Fill)
        .style(container_panel)
        .into()
}

fn view_entry<'a>(entry: &HistoryEntry) -> Element<'a, Message> {
    let marker = if entry.changed {
        lucide::circle_check()
    } else {
        lucide::circle()
    };

    let target = entry
        .action
        .target()
        .map(|id| id.to_string())
        .unwrap_or_default();

    row![
        muted(entry.sequence.to_string(), 11.0).width(Length::Fixed(28.0)),
        marker.size(12),
        text(entry.action.name()).size(12),
        muted(target, 12.0),
        Space::new().width(Length::Fill),
        muted(format!("{} fields", entry.field_count), 11.0),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn muted<'a>(content: String, size: f32) -> iced::widget::Text<'a> {
    text(content).size(size).style(|theme: &Theme| text::Style {
        color: Some(text_muted(theme)),
    })
}
