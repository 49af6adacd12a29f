use iced::Task;
use pase_session::{Credentials, Provider, SignIn};

use crate::app::{App, AppEvent};
use crate::routers::login::open_url;
use crate::routers::toast::notify;
use crate::widgets::register::{RegisterCommand, RegisterEffect, RegisterEvent};

/// Route a register UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: RegisterEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a register command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: RegisterCommand,
) -> Task<AppEvent> {
    app.widgets.register.reduce(command).map(AppEvent::RegisterEffect)
}

/// Route a register effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: RegisterEffect,
) -> Task<AppEvent> {
    match effect {
        RegisterEffect::SignUpRequested { credentials } => {
            sign_up(app, credentials)
        },
        RegisterEffect::ProviderSignInRequested { provider } => {
            provider_sign_in(app, provider)
        },
        RegisterEffect::OpenBrowser { url } => open_url(&url),
        RegisterEffect::Notify(notice) => notify(notice),
        RegisterEffect::Navigate { path } => {
            Task::done(AppEvent::Navigate { path })
        },
    }
}

fn sign_up(app: &App, credentials: Credentials) -> Task<AppEvent> {
    let session = app.services.session.clone();
    let submitted = credentials.email.clone();
    Task::perform(
        async move { session.sign_up(credentials).await },
        move |result| match result {
            Ok(user) => AppEvent::RegisterUi(RegisterEvent::SignUpCompleted {
                email: user.email.unwrap_or(submitted),
            }),
            Err(err) => {
                AppEvent::RegisterUi(RegisterEvent::SignUpFailed(err.to_string()))
            },
        },
    )
}

fn provider_sign_in(app: &App, provider: Provider) -> Task<AppEvent> {
    let session = app.services.session.clone();
    Task::perform(
        async move { session.sign_in(SignIn::Provider(provider)).await },
        |result| match result {
            Ok(outcome) => {
                AppEvent::RegisterUi(RegisterEvent::ProviderCompleted(outcome))
            },
            Err(err) => {
                AppEvent::RegisterUi(RegisterEvent::ProviderFailed(err.to_string()))
            },
        },
    )
}

fn map_event_to_command(event: RegisterEvent) -> RegisterCommand {
    use {RegisterCommand as C, RegisterEvent as E};

    match event {
        E::EmailChanged(value) => C::EmailChanged(value),
        E::PasswordChanged(value) => C::PasswordChanged(value),
        E::ConfirmChanged(value) => C::ConfirmChanged(value),
        E::Submit => C::Submit,
        E::SignUpWithProvider(provider) => C::SignUpWithProvider(provider),
        E::OpenLogin => C::OpenLogin,
        E::Undo => C::Undo,
        E::SignUpCompleted { email } => C::SignUpCompleted { email },
        E::SignUpFailed(message) => C::SignUpFailed { message },
        E::ProviderCompleted(outcome) => C::ProviderCompleted(outcome),
        E::ProviderFailed(message) => C::ProviderFailed { message },
    }
}
