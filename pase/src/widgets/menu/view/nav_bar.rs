use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Row, button, column, container, text};
use iced::{Color, Element, Length, alignment};

use super::super::event::MenuEvent;
use super::super::model::MenuViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{ColorPalette, ThemeProps};

pub(crate) const NAV_BAR_HEIGHT: f32 = 46.0;
const NAV_BAR_PADDING_X: f32 = 16.0;
const TAB_PADDING_X: f32 = 12.0;
const TAB_UNDERLINE_HEIGHT: f32 = 2.0;

/// Props for rendering the tab bar.
#[derive(Debug, Clone)]
pub(crate) struct NavBarProps<'a> {
    pub(crate) vm: MenuViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render one button per catalog tab, marking the active one.
pub(crate) fn view<'a>(props: NavBarProps<'a>) -> Element<'a, MenuEvent> {
    let palette = *props.theme.palette();

    let tabs = props.vm.tabs.iter().fold(
        Row::new().height(Length::Fill),
        |tabs, entry| {
            let is_active = entry.key() == props.vm.active_tab;
            tabs.push(tab_button(
                entry.name(),
                entry.key(),
                is_active,
                &palette,
                props.fonts,
            ))
        },
    );

    container(tabs)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_BAR_HEIGHT))
        .padding([0.0, NAV_BAR_PADDING_X])
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

fn tab_button<'a>(
    name: &'a str,
    key: &'a str,
    is_active: bool,
    palette: &ColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, MenuEvent> {
    let underline_color = if is_active {
        palette.accent
    } else {
        Color::TRANSPARENT
    };
    let text_color = if is_active {
        palette.foreground
    } else {
        palette.dim_foreground
    };
    let hover_color = palette.foreground;

    let caption = text(name).size(fonts.ui.size).font(fonts.ui.font_type);
    let label = container(caption)
        .height(Length::Fill)
        .padding([0.0, TAB_PADDING_X])
        .align_y(alignment::Vertical::Center);
    let underline = container(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(TAB_UNDERLINE_HEIGHT))
        .style(move |_| container::Style {
            background: Some(underline_color.into()),
            ..Default::default()
        });

    button(column![label, underline].width(Length::Shrink))
        .padding(0.0)
        .height(Length::Fill)
        .on_press(MenuEvent::SelectTab {
            tab: key.to_string(),
        })
        .style(move |_, status| button::Style {
            background: None,
            text_color: match status {
                ButtonStatus::Hovered | ButtonStatus::Pressed => hover_color,
                _ => text_color,
            },
            ..Default::default()
        })
        .into()
}
