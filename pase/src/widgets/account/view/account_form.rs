use iced::widget::{Space, column, container, radio, row, svg, text, text_input};
use iced::{Element, Length, alignment};
use pase_session::AvatarVariant;

use super::super::errors::MAX_NAME_LENGTH;
use super::super::event::AccountEvent;
use super::super::model::{AVATAR_SIZE, AccountViewModel};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::form::{
    ButtonVariant, action_button, card, field, text_input_style,
};
use crate::shared::ui::theme::ThemeProps;

const SECTION_SPACING: f32 = 16.0;
const INPUT_PADDING: f32 = 8.0;
const SECTION_TITLE_SIZE: f32 = 18.0;

/// Props for rendering the account settings page.
#[derive(Debug, Clone)]
pub(crate) struct AccountFormProps<'a> {
    pub(crate) vm: AccountViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the name and avatar sections.
pub(crate) fn view<'a>(props: AccountFormProps<'a>) -> Element<'a, AccountEvent> {
    let dim = props.theme.palette().dim_foreground;

    if !props.vm.loaded {
        let message = if props.vm.loading {
            "Loading profile..."
        } else {
            "Profile unavailable."
        };
        return container(
            text(message)
                .size(props.fonts.ui.size)
                .font(props.fonts.ui.font_type)
                .style(move |_| text::Style { color: Some(dim) }),
        )
        .padding(24.0)
        .into();
    }

    column![name_section(&props), avatar_section(&props)]
        .spacing(SECTION_SPACING)
        .padding(24.0)
        .width(Length::Fill)
        .into()
}

fn name_section<'a>(props: &AccountFormProps<'a>) -> Element<'a, AccountEvent> {
    let vm = &props.vm;
    let input = text_input("Your name", vm.name_draft)
        .on_input(AccountEvent::NameChanged)
        .on_submit(AccountEvent::SaveName)
        .padding(INPUT_PADDING)
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type)
        .style(text_input_style(props.theme, vm.name_error.is_some()));

    let hint = format!("Please use {MAX_NAME_LENGTH} characters at maximum.");
    let content = column![
        section_title("Account Name", props),
        field(
            "Name",
            input,
            vm.name_error.map(|err| err.to_string()),
            props.theme,
        ),
        footer(hint, vm.can_save_name.then_some(AccountEvent::SaveName), props),
    ]
    .spacing(12.0);

    card(content, props.theme)
}

fn avatar_section<'a>(
    props: &AccountFormProps<'a>,
) -> Element<'a, AccountEvent> {
    let vm = &props.vm;
    let selected = Some(vm.avatar_draft);
    let choices = AvatarVariant::ALL.iter().fold(
        row![].spacing(24.0),
        |choices, variant| {
            choices.push(
                radio(
                    capitalized(variant.as_str()),
                    *variant,
                    selected,
                    AccountEvent::AvatarSelected,
                )
                .size(16.0)
                .text_size(props.fonts.ui.size),
            )
        },
    );

    let preview: Element<'a, AccountEvent> = match vm.avatar {
        Some(handle) => svg::Svg::new(handle.clone())
            .width(Length::Fixed(AVATAR_SIZE as f32))
            .height(Length::Fixed(AVATAR_SIZE as f32))
            .into(),
        None => Space::new()
            .width(Length::Fixed(AVATAR_SIZE as f32))
            .height(Length::Fixed(AVATAR_SIZE as f32))
            .into(),
    };

    let content = column![
        section_title("Avatar", props),
        row![preview, choices]
            .spacing(24.0)
            .align_y(alignment::Vertical::Center),
        footer(
            String::from("Choose the style of your generated avatar."),
            vm.can_save_avatar.then_some(AccountEvent::SaveAvatar),
            props,
        ),
    ]
    .spacing(12.0);

    card(content, props.theme)
}

fn section_title<'a>(
    title: &'a str,
    props: &AccountFormProps<'a>,
) -> Element<'a, AccountEvent> {
    text(title)
        .size(SECTION_TITLE_SIZE)
        .font(props.fonts.heading.font_type)
        .into()
}

fn footer<'a>(
    hint: String,
    on_save: Option<AccountEvent>,
    props: &AccountFormProps<'a>,
) -> Element<'a, AccountEvent> {
    let dim = props.theme.palette().dim_foreground;

    row![
        text(hint)
            .size(props.fonts.ui.size)
            .font(props.fonts.ui.font_type)
            .style(move |_| text::Style { color: Some(dim) }),
        Space::new().width(Length::Fill),
        action_button("Update", on_save, ButtonVariant::Primary, props.theme),
    ]
    .align_y(alignment::Vertical::Center)
    .into()
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
