use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length, alignment};
use pase_session::Provider;
use secrecy::ExposeSecret;

use super::super::event::RegisterEvent;
use super::RegisterProps;
use crate::shared::ui::form::{
    ButtonVariant, action_button, card, field, text_input_style,
};

const FORM_WIDTH: f32 = 380.0;
const FORM_SPACING: f32 = 16.0;
const INPUT_PADDING: f32 = 8.0;

/// Render the sign-up card.
pub(crate) fn view<'a>(props: RegisterProps<'a>) -> Element<'a, RegisterEvent> {
    let vm = props.vm;
    let enabled = !vm.loading;
    let size = props.fonts.ui.size;
    let font = props.fonts.ui.font_type;

    let mut email = text_input("you@example.com", vm.email)
        .padding(INPUT_PADDING)
        .size(size)
        .font(font)
        .style(text_input_style(props.theme, vm.email_error.is_some()));
    let mut password = text_input("Password", vm.password.expose_secret())
        .secure(true)
        .padding(INPUT_PADDING)
        .size(size)
        .font(font)
        .style(text_input_style(props.theme, vm.password_error.is_some()));
    let mut confirm = text_input("Repeat password", vm.confirm.expose_secret())
        .secure(true)
        .padding(INPUT_PADDING)
        .size(size)
        .font(font)
        .style(text_input_style(props.theme, vm.confirm_error.is_some()));
    if enabled {
        email = email
            .on_input(RegisterEvent::EmailChanged)
            .on_submit(RegisterEvent::Submit);
        password = password
            .on_input(RegisterEvent::PasswordChanged)
            .on_submit(RegisterEvent::Submit);
        confirm = confirm
            .on_input(RegisterEvent::ConfirmChanged)
            .on_submit(RegisterEvent::Submit);
    }

    let submit_label = if vm.loading { "Signing Up..." } else { "Sign Up" };
    let dim = props.theme.palette().dim_foreground;
    let accent = props.theme.palette().accent;
    let login_link = button(text("Log in").size(size).font(font))
        .padding(0.0)
        .on_press_maybe(enabled.then_some(RegisterEvent::OpenLogin))
        .style(move |_, _| button::Style {
            background: None,
            text_color: accent,
            ..Default::default()
        });

    let content = column![
        text("Create Account")
            .size(props.fonts.heading.size)
            .font(props.fonts.heading.font_type),
        field(
            "Email",
            email,
            vm.email_error.map(|err| err.to_string()),
            props.theme,
        ),
        field(
            "Password",
            password,
            vm.password_error.map(|err| err.to_string()),
            props.theme,
        ),
        field(
            "Confirm password",
            confirm,
            vm.confirm_error.map(|err| err.to_string()),
            props.theme,
        ),
        action_button(
            submit_label,
            enabled.then_some(RegisterEvent::Submit),
            ButtonVariant::Primary,
            props.theme,
        ),
        action_button(
            "Sign up with Google",
            enabled.then_some(RegisterEvent::SignUpWithProvider(
                Provider::Google
            )),
            ButtonVariant::Secondary,
            props.theme,
        ),
        row![
            text("Already have an account?")
                .size(size)
                .font(font)
                .style(move |_| text::Style { color: Some(dim) }),
            login_link,
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
