use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length, Theme, alignment};

use super::theme::{ColorPalette, ThemeProps};

const BUTTON_HEIGHT: f32 = 34.0;
const BUTTON_PADDING_X: f32 = 14.0;
const BUTTON_FONT_SIZE: f32 = 14.0;
const FIELD_LABEL_SIZE: f32 = 13.0;
const FIELD_ERROR_SIZE: f32 = 12.0;
const FIELD_SPACING: f32 = 4.0;
const CARD_PADDING: f32 = 24.0;
const CARD_RADIUS: f32 = 8.0;

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonVariant {
    Primary,
    Secondary,
}

/// Render a text button; `None` renders it disabled.
pub(crate) fn action_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Option<Message>,
    variant: ButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = *theme.palette();
    let enabled = on_press.is_some();
    let content = container(
        text(label)
            .size(BUTTON_FONT_SIZE)
            .align_x(alignment::Horizontal::Center),
    )
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(content)
        .padding([0.0, BUTTON_PADDING_X])
        .height(Length::Fixed(BUTTON_HEIGHT))
        .on_press_maybe(on_press)
        .style(move |_, status| button_style(&palette, status, variant, enabled))
        .into()
}

fn button_style(
    palette: &ColorPalette,
    status: ButtonStatus,
    variant: ButtonVariant,
    enabled: bool,
) -> button::Style {
    let hovered = matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);
    let (mut background, text_color) = match variant {
        ButtonVariant::Primary => (palette.accent, palette.accent_foreground),
        ButtonVariant::Secondary if hovered => (palette.border, palette.foreground),
        ButtonVariant::Secondary => (palette.overlay, palette.foreground),
    };
    if variant == ButtonVariant::Primary && hovered {
        background.a = 0.85;
    }
    if !enabled {
        background.a = 0.4;
    }

    button::Style {
        background: Some(background.into()),
        text_color,
        border: iced::Border {
            radius: iced::border::Radius::from(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Text input style highlighting the border when the field is invalid.
pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = *theme.palette();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.selection = palette.accent;
        if invalid {
            style.border.color = palette.danger;
        }
        style
    }
}

/// Label, input and optional error message stacked vertically.
pub(crate) fn field<'a, Message: 'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    error: Option<String>,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = theme.palette();
    let dim = palette.dim_foreground;
    let danger = palette.danger;

    let mut content = column![
        text(label)
            .size(FIELD_LABEL_SIZE)
            .style(move |_| text::Style { color: Some(dim) }),
        input.into(),
    ]
    .spacing(FIELD_SPACING);

    if let Some(error) = error {
        content = content.push(
            text(error)
                .size(FIELD_ERROR_SIZE)
                .style(move |_| text::Style {
                    color: Some(danger),
                }),
        );
    }

    content.into()
}

/// White bordered panel used for forms and settings sections.
pub(crate) fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = *theme.palette();

    container(content)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: iced::Border {
                width: 1.0,
                color: palette.border,
                radius: iced::border::Radius::from(CARD_RADIUS),
            },
            ..Default::default()
        })
        .into()
}
