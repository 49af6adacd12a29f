use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::super::event::MenuEvent;
use super::super::model::MenuViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const HEADER_PADDING_X: f32 = 24.0;
const HEADER_PADDING_Y: f32 = 28.0;

/// Props for rendering the active tab header.
#[derive(Debug, Clone)]
pub(crate) struct TabHeaderProps<'a> {
    pub(crate) vm: MenuViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the active tab's name and description.
pub(crate) fn view<'a>(props: TabHeaderProps<'a>) -> Element<'a, MenuEvent> {
    let Some(entry) = props.vm.active_entry else {
        return column![].into();
    };
    let palette = *props.theme.palette();
    let dim = palette.dim_foreground;

    let content = column![
        text(entry.name())
            .size(props.fonts.heading.size)
            .font(props.fonts.heading.font_type),
        text(entry.description())
            .size(props.fonts.ui.size)
            .font(props.fonts.ui.font_type)
            .style(move |_| text::Style { color: Some(dim) }),
    ]
    .spacing(6.0);

    container(content)
        .width(Length::Fill)
        .padding([HEADER_PADDING_Y, HEADER_PADDING_X])
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: iced::Border {
                width: 1.0,
                color: palette.border,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
