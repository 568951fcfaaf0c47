//! View layer.
//!
//! Every frame is built from the store's current state plus UI state:
//!
//! ```text
//! ┌──────────────────────────────────────────────┬──────────┐
//! │ header                                       │          │
//! │ error banner (if any)                        │ history  │
//! │ ┌────────┐ ┌────────┐ ┌────────┐             │ (toggle) │
//! │ │ field  │ │ field  │ │ field  │             │          │
//! │ └────────┘ └────────┘ └────────┘             │          │
//! │ [+ Add field]                                │          │
//! └──────────────────────────────────────────────┴──────────┘
//! ```

mod field_editor;
mod history;

use iced::widget::{Space, button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::{NoticeMessage, ProfileEditor, view_notice};
use crate::error::EditorError;
use crate::message::{Message, ProfileMessage};
use crate::state::EditorState;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, button_secondary,
    container_banner, text_muted,
};

pub use field_editor::view_field_editor;
pub use history::view_history;

/// Render the editor window.
pub fn view_editor(state: &EditorState) -> Element<'_, Message> {
    let app_state = state.store.state();
    let fields = app_state.fields();

    let children = fields
        .iter()
        .enumerate()
        .map(|(index, field)| view_field_editor(field, index, fields.len(), &state.ui))
        .collect();

    let grid = ProfileEditor::new(children, Message::Profile(ProfileMessage::AddFieldClicked))
        .columns(state.settings.editor.grid_columns)
        .view();

    let mut main = column![view_header(state)].spacing(SPACING_MD);
    if let Some(error) = &state.error {
        main = main.push(view_error_banner(error));
    }
    main = main.push(
        scrollable(container(grid).padding([0.0, SPACING_XS]))
            .height(Length::Fill)
            .width(Length::Fill),
    );

    let main = container(main)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill);

    let content: Element<'_, Message> = if state.ui.show_history {
        row![main, view_history(state.store.history())].into()
    } else {
        main.into()
    };

    let Some(notice) = &state.ui.notice else {
        return content;
    };

    // Bottom-centered notice over the content
    let notice_row = row![
        Space::new().width(Length::Fill),
        view_notice(notice, Message::Notice(NoticeMessage::Dismiss)),
        Space::new().width(Length::Fill),
    ];
    let overlay = column![Space::new().height(Length::Fill), notice_row]
        .padding(SPACING_LG);

    stack![content, overlay].into()
}

fn view_header(state: &EditorState) -> Element<'_, Message> {
    let count = state.store.state().fields().len();
    let history_label = if state.ui.show_history {
        "Hide history"
    } else {
        "Show history"
    };

    row![
        text("Profile").size(22),
        text(format!("{count} fields"))
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(text_muted(theme)),
            }),
        Space::new().width(Length::Fill),
        button(
            row![lucide::list().size(14), text(history_label).size(13)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center)
        )
        .on_press(Message::ToggleHistory)
        .padding([SPACING_XS, SPACING_SM])
        .style(button_secondary),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center)
    .into()
}

fn view_error_banner(error: &EditorError) -> Element<'_, Message> {
    let mut message = column![text(error.to_string()).size(14)].spacing(SPACING_XS);
    if let Some(suggestion) = error.suggestion() {
        message = message.push(text(suggestion).size(12));
    }

    container(
        row![
            lucide::circle_alert().size(18),
            message,
            Space::new().width(Length::Fill),
            button(lucide::x().size(14))
                .on_press(Message::DismissError)
                .padding(SPACING_XS)
                .style(button_ghost),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(container_banner)
    .into()
}
