use iced::widget::{column, container, text};
use iced::{Element, Length, alignment};

use super::super::event::RegisterEvent;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::form::{ButtonVariant, action_button, card};
use crate::shared::ui::theme::ThemeProps;

const NOTICE_WIDTH: f32 = 420.0;

/// Render the "check your inbox" notice with an Undo action.
pub(crate) fn view<'a>(
    email: &'a str,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, RegisterEvent> {
    let dim = theme.palette().dim_foreground;

    let content = column![
        text("Awaiting Confirmation")
            .size(fonts.heading.size)
            .font(fonts.heading.font_type),
        text(format!(
            "We sent a confirmation link to {email}. Follow it to activate \
             your account, then log in."
        ))
        .size(fonts.ui.size)
        .font(fonts.ui.font_type)
        .style(move |_| text::Style { color: Some(dim) }),
        action_button(
            "Undo",
            Some(RegisterEvent::Undo),
            ButtonVariant::Secondary,
            theme,
        ),
    ]
    .spacing(16.0);

    container(
        container(card(content, theme)).width(Length::Fixed(NOTICE_WIDTH)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
