use iced::Task;
use pase_session::SignIn;

use crate::app::{App, AppEvent};
use crate::routers::toast::notify;
use crate::services::open_in_browser;
use crate::widgets::login::{LoginCommand, LoginEffect, LoginEvent};
use crate::widgets::toast::Notice;

/// Route a login UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: LoginEvent) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a login command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: LoginCommand,
) -> Task<AppEvent> {
    app.widgets.login.reduce(command).map(AppEvent::LoginEffect)
}

/// Route a login effect event to app-level tasks.
pub(crate) fn route_effect(app: &mut App, effect: LoginEffect) -> Task<AppEvent> {
    match effect {
        LoginEffect::SignInRequested { credentials } => {
            sign_in(app, SignIn::Password(credentials))
        },
        LoginEffect::ProviderSignInRequested { provider } => {
            sign_in(app, SignIn::Provider(provider))
        },
        LoginEffect::SessionEstablished { user } => {
            Task::done(AppEvent::SessionChanged(Some(user)))
        },
        LoginEffect::OpenBrowser { url } => open_url(&url),
        LoginEffect::Notify(notice) => notify(notice),
        LoginEffect::Navigate { path } => Task::done(AppEvent::Navigate { path }),
    }
}

fn sign_in(app: &App, request: SignIn) -> Task<AppEvent> {
    let session = app.services.session.clone();
    Task::perform(async move { session.sign_in(request).await }, |result| {
        match result {
            Ok(outcome) => AppEvent::LoginUi(LoginEvent::SignInCompleted(outcome)),
            Err(err) => AppEvent::LoginUi(LoginEvent::SignInFailed(err.to_string())),
        }
    })
}

/// Open `url` in the system browser, reporting failures as a toast.
pub(crate) fn open_url(url: &str) -> Task<AppEvent> {
    match open_in_browser(url) {
        Ok(()) => Task::none(),
        Err(message) => {
            log::warn!("{message}");
            notify(Notice::error(message))
        },
    }
}

fn map_event_to_command(event: LoginEvent) -> LoginCommand {
    use {LoginCommand as C, LoginEvent as E};

    match event {
        E::EmailChanged(value) => C::EmailChanged(value),
        E::PasswordChanged(value) => C::PasswordChanged(value),
        E::Submit => C::Submit,
        E::SignInWithProvider(provider) => C::SignInWithProvider(provider),
        E::OpenRegister => C::OpenRegister,
        E::SignInCompleted(outcome) => C::SignInCompleted(outcome),
        E::SignInFailed(message) => C::SignInFailed { message },
    }
}
