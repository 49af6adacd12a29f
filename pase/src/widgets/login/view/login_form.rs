use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length, alignment};
use pase_session::Provider;
use secrecy::ExposeSecret;

use super::super::event::LoginEvent;
use super::super::model::LoginViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::form::{
    ButtonVariant, action_button, card, field, text_input_style,
};
use crate::shared::ui::theme::ThemeProps;

const FORM_WIDTH: f32 = 380.0;
const FORM_SPACING: f32 = 16.0;
const INPUT_PADDING: f32 = 8.0;

/// Props for rendering the login form.
#[derive(Debug, Clone)]
pub(crate) struct LoginFormProps<'a> {
    pub(crate) vm: LoginViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the centered login card.
pub(crate) fn view<'a>(props: LoginFormProps<'a>) -> Element<'a, LoginEvent> {
    let vm = props.vm;
    let enabled = !vm.loading;

    let mut email = text_input("you@example.com", vm.email)
        .padding(INPUT_PADDING)
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type)
        .style(text_input_style(props.theme, vm.email_error.is_some()));
    let mut password = text_input("Password", vm.password.expose_secret())
        .secure(true)
        .padding(INPUT_PADDING)
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type)
        .style(text_input_style(props.theme, vm.password_error.is_some()));
    if enabled {
        email = email
            .on_input(LoginEvent::EmailChanged)
            .on_submit(LoginEvent::Submit);
        password = password
            .on_input(LoginEvent::PasswordChanged)
            .on_submit(LoginEvent::Submit);
    }

    let submit_label = if vm.loading { "Logging In..." } else { "Log In" };
    let provider = Provider::Google;

    let dim = props.theme.palette().dim_foreground;
    let accent = props.theme.palette().accent;
    let register_caption = text("Sign up")
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type);
    let register_link = button(register_caption)
        .padding(0.0)
        .on_press_maybe(enabled.then_some(LoginEvent::OpenRegister))
        .style(move |_, _| button::Style {
            background: None,
            text_color: accent,
            ..Default::default()
        });

    let content = column![
        text("Log In")
            .size(props.fonts.heading.size)
            .font(props.fonts.heading.font_type),
        field(
            "Email",
            email,
            vm.email_error.map(|err| err.to_string()),
            props.theme
        ),
        field(
            "Password",
            password,
            vm.password_error.map(|err| err.to_string()),
            props.theme,
        ),
        action_button(
            submit_label,
            enabled.then_some(LoginEvent::Submit),
            ButtonVariant::Primary,
            props.theme,
        ),
        action_button(
            "Continue with Google",
            enabled.then_some(LoginEvent::SignInWithProvider(provider)),
            ButtonVariant::Secondary,
            props.theme,
        ),
        row![
            text("Don't have an account?")
                .size(props.fonts.ui.size)
                .font(props.fonts.ui.font_type)
                .style(move |_| text::Style { color: Some(dim) }),
            register_link,
        ]
        .spacing(6.0)
        .align_y(alignment::Vertical::Center),
    ]
    .spacing(FORM_SPACING);

    container(
        container(card(content, props.theme)).width(Length::Fixed(FORM_WIDTH)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
