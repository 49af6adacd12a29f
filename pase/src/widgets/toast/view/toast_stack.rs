use iced::widget::{Column, button, container, row, text};
use iced::{Color, Element, Length, alignment};

use super::super::event::ToastEvent;
use super::super::model::{NoticeKind, ToastItemVm, ToastViewModel};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{ColorPalette, ThemeProps};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_SPACING: f32 = 8.0;
const TOAST_PADDING: f32 = 12.0;
const STACK_MARGIN: f32 = 16.0;

/// Props for rendering the toast stack.
#[derive(Debug, Clone)]
pub(crate) struct ToastStackProps<'a> {
    pub(crate) vm: ToastViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the toasts in the bottom-right corner, newest last.
pub(crate) fn view<'a>(props: ToastStackProps<'a>) -> Element<'a, ToastEvent> {
    let palette = *props.theme.palette();
    let stack = props.vm.toasts.into_iter().fold(
        Column::new().spacing(TOAST_SPACING),
        |stack, item| stack.push(toast(item, &palette, props.fonts)),
    );

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(STACK_MARGIN)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn toast<'a>(
    item: ToastItemVm<'a>,
    palette: &ColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, ToastEvent> {
    let accent = kind_color(item.notice.kind, palette);
    let surface = palette.surface;
    let foreground = palette.foreground;

    let close_icon = text("×").size(fonts.ui.size).font(fonts.ui.font_type);
    let close = button(close_icon)
        .padding([0.0, 6.0])
        .on_press(ToastEvent::Dismiss { id: item.id })
        .style(move |_, _| button::Style {
            background: None,
            text_color: foreground,
            ..Default::default()
        });

    let content = row![
        text(item.notice.text.as_str())
            .size(fonts.ui.size)
            .font(fonts.ui.font_type)
            .width(Length::Fill),
        close,
    ]
    .spacing(8.0)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(TOAST_PADDING)
        .style(move |_| container::Style {
            background: Some(surface.into()),
            text_color: Some(foreground),
            border: iced::Border {
                width: 1.0,
                color: accent,
                radius: iced::border::Radius::from(6.0),
            },
            ..Default::default()
        })
        .into()
}

fn kind_color(kind: NoticeKind, palette: &ColorPalette) -> Color {
    match kind {
        NoticeKind::Error => palette.danger,
        NoticeKind::Info => palette.accent,
        NoticeKind::Success => palette.success,
    }
}
