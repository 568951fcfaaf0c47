//! Field editor card.
//!
//! One card per field: header with reorder and remove controls, the name
//! input, the kind selector, the nullable toggle, and bound inputs for kinds
//! that have them.

use iced::widget::{Row, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use profile_model::{Bound, Field, FieldKind, Restrictions};

use crate::component::form_field;
use crate::message::{Message, ProfileMessage};
use crate::state::UiState;
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_danger, button_ghost, button_primary,
    button_secondary, container_card, text_muted,
};

/// Render the editor card for the field at `index` of `count`.
pub fn view_field_editor<'a>(
    field: &Field,
    index: usize,
    count: usize,
    ui: &UiState,
) -> Element<'a, Message> {
    let mut content = column![
        view_header(field, index, count),
        form_field(
            "Name",
            &field.name,
            "Field name",
            {
                let id = field.id;
                move |name| Message::Profile(ProfileMessage::NameChanged(id, name))
            },
            None,
        ),
        view_kind_selector(field),
        view_nullable_toggle(field),
    ]
    .spacing(SPACING_MD);

    if field.kind.has_bounds() {
        content = content.push(view_bounds(field, ui));
    }

    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

fn view_header<'a>(field: &Field, index: usize, count: usize) -> Element<'a, Message> {
    let id = field.id;

    let title = row![
        kind_icon(field.kind).size(16),
        text(field.display_name()).size(15),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let earlier = button(lucide::chevron_left().size(14))
        .on_press_maybe((index > 0).then_some(Message::Profile(ProfileMessage::MoveEarlier(id))))
        .padding(SPACING_XS)
        .style(button_ghost);

    let later = button(lucide::chevron_right().size(14))
        .on_press_maybe(
            (index + 1 < count).then_some(Message::Profile(ProfileMessage::MoveLater(id))),
        )
        .padding(SPACING_XS)
        .style(button_ghost);

    let remove = button(lucide::trash().size(14))
        .on_press(Message::Profile(ProfileMessage::RemoveClicked(id)))
        .padding(SPACING_XS)
        .style(button_danger);

    row![
        title,
        Space::new().width(Length::Fill),
        earlier,
        later,
        remove
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn view_kind_selector<'a>(field: &Field) -> Element<'a, Message> {
    let id = field.id;

    let options = FieldKind::ALL
        .into_iter()
        .fold(Row::new().spacing(SPACING_XS), |options, kind| {
            let option = button(text(kind.label()).size(12))
                .on_press(Message::Profile(ProfileMessage::KindSelected(id, kind)))
                .padding([SPACING_XS, SPACING_SM])
                .style(if kind == field.kind {
                    button_primary
                } else {
                    button_secondary
                });
            options.push(option)
        });

    column![muted_label("Kind"), options]
        .spacing(SPACING_XS)
        .into()
}

fn view_nullable_toggle<'a>(field: &Field) -> Element<'a, Message> {
    let icon = if field.nullable {
        lucide::circle_check()
    } else {
        lucide::circle()
    };

    button(
        row![icon.size(14), text("Nullable").size(13)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Profile(ProfileMessage::NullableToggled(field.id)))
    .padding([SPACING_XS, SPACING_SM])
    .style(button_ghost)
    .into()
}

fn view_bounds<'a>(field: &Field, ui: &UiState) -> Element<'a, Message> {
    let bound_input = |bound: Bound| {
        let id = field.id;
        form_field(
            Restrictions::bound_label(field.kind, bound).unwrap_or_default(),
            &ui.bound_text(field, bound),
            bound_placeholder(field.kind),
            move |text| Message::Profile(ProfileMessage::BoundChanged { id, bound, text }),
            ui.bound_error(id, bound).map(str::to_string),
        )
    };

    row![bound_input(Bound::Lower), bound_input(Bound::Upper)]
        .spacing(SPACING_SM)
        .into()
}

fn bound_placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Unclassified => "",
        FieldKind::String => "Length",
        FieldKind::Numeric => "Number",
        FieldKind::Temporal => "YYYY-MM-DD",
    }
}

fn kind_icon<'a>(kind: FieldKind) -> iced::widget::Text<'a> {
    match kind {
        FieldKind::Unclassified => lucide::circle(),
        FieldKind::String => lucide::file_text(),
        FieldKind::Numeric => lucide::hash(),
        FieldKind::Temporal => lucide::calendar(),
    }
}

fn muted_label<'a>(label: &'a str) -> iced::widget::Text<'a> {
    text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(text_muted(theme)),
    })
}
