//! Form field component.
//!
//! Labeled text input with an optional error line underneath.

use iced::widget::{column, container, text, text_input};
use iced::{Border, Element, Length, Theme};

use crate::theme::{BORDER_WIDTH_MEDIUM, SPACING_XS, text_input_default, text_muted};

// =============================================================================
// FORM FIELD
// =============================================================================

/// Creates a form field with label and optional error message.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `value` - Current field value
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for value changes
/// * `error` - Optional error message to display
///
/// # Example
///
/// ```rust,ignore
/// use profile_editor::component::form_field;
///
/// let name = form_field(
///     "Name",
///     &field.name,
///     "Field name",
///     move |s| Message::Profile(ProfileMessage::NameChanged(id, s)),
///     None,
/// );
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: impl Into<String>,
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<String>,
) -> Element<'a, M> {
    let label_text = text(label.into())
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(text_muted(theme)),
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(8.0)
        .width(Length::Fill)
        .style(if error.is_some() {
            text_input_error_style
        } else {
            text_input_default
        });

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(err) = error {
        let error_text = text(err)
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            });
        content = content.push(error_text);
    }

    container(content).width(Length::Fill).into()
}

/// Text input style for fields holding an invalid value.
fn text_input_error_style(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input_default(theme, status);
    let danger = theme.extended_palette().danger.base.color;

    text_input::Style {
        border: Border {
            color: danger,
            width: base.border.width.max(BORDER_WIDTH_MEDIUM),
            ..base.border
        },
        ..base
    }
}
