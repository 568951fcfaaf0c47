//! Widget style functions.
//!
//! Style functions receive `&Theme` and derive every color from
//! `theme.extended_palette()`:
//!
//! ```rust,ignore
//! use crate::theme::button_primary;
//!
//! button(text("Save")).style(button_primary)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::spacing;

// =============================================================================
// TEXT
// =============================================================================

/// Muted text color for labels and secondary information.
pub fn text_muted(theme: &Theme) -> Color {
    theme.extended_palette().secondary.base.color
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn radius_sm() -> Border {
    Border {
        radius: spacing::BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

fn disabled(style: button::Style) -> button::Style {
    button::Style {
        background: style.background.map(|bg| bg.scale_alpha(0.4)),
        text_color: Color {
            a: 0.4,
            ..style.text_color
        },
        shadow: Shadow::default(),
        ..style
    }
}

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let base = button::Style {
        background: Some(palette.primary.base.color.into()),
        text_color: palette.primary.base.text,
        border: radius_sm(),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => disabled(base),
    }
}

/// Secondary button style - alternative actions and unselected toggles.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let base = button::Style {
        background: Some(palette.background.base.color.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.weak.color.into()),
            border: Border {
                color: palette.primary.base.color,
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => disabled(base),
    }
}

/// Danger button style - destructive actions.
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let base = button::Style {
        background: None,
        text_color: palette.danger.base.color,
        border: radius_sm(),
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.danger.base.color.into()),
            text_color: palette.danger.base.text,
            ..base
        },
        button::Status::Disabled => disabled(base),
    }
}

/// Ghost button style - minimal visual weight.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let base = button::Style {
        background: None,
        text_color: palette.primary.base.color,
        border: radius_sm(),
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.weak.color.into()),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            ..base
        },
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - one field editor.
pub fn container_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Side panel style.
pub fn container_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: 0.0.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Error banner style.
pub fn container_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let base = text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        icon: text_muted(theme),
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: palette.background.base.text,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                width: spacing::BORDER_WIDTH_MEDIUM,
                color: palette.primary.base.color,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: palette.background.weak.color.into(),
            value: text_muted(theme),
            ..base
        },
    }
}
