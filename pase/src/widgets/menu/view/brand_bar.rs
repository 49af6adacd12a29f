use iced::widget::{Space, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::MenuEvent;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::form::{ButtonVariant, action_button};
use crate::shared::ui::theme::ThemeProps;

pub(crate) const BRAND_BAR_HEIGHT: f32 = 60.0;
const BRAND_BAR_PADDING_X: f32 = 24.0;
const BRAND_TITLE: &str = "Ultimo Pase";

/// Props for rendering the brand row.
#[derive(Debug, Clone)]
pub(crate) struct BrandBarProps<'a> {
    pub(crate) email: Option<&'a str>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the application title and the Log Out action.
pub(crate) fn view<'a>(props: BrandBarProps<'a>) -> Element<'a, MenuEvent> {
    let palette = *props.theme.palette();

    let title = text(BRAND_TITLE)
        .size(props.fonts.heading.size)
        .font(props.fonts.heading.font_type);

    let mut controls = row![].spacing(12.0).align_y(alignment::Vertical::Center);
    if let Some(email) = props.email {
        let dim = palette.dim_foreground;
        controls = controls.push(
            text(email)
                .size(props.fonts.ui.size)
                .font(props.fonts.ui.font_type)
                .style(move |_| text::Style { color: Some(dim) }),
        );
    }
    controls = controls.push(action_button(
        "Log Out",
        Some(MenuEvent::SignOut),
        ButtonVariant::Secondary,
        props.theme,
    ));

    let content = row![title, Space::new().width(Length::Fill), controls]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(BRAND_BAR_HEIGHT))
        .padding([0.0, BRAND_BAR_PADDING_X])
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            ..Default::default()
        })
        .into()
}
