use iced::Task;
use pase_session::SignInOutcome;

use super::command::LoginCommand;
use super::event::LoginEffect;
use super::state::LoginState;
use crate::navigation::route::REGISTER_PATH;
use crate::widgets::toast::Notice;

/// Reduce a login command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut LoginState,
    command: LoginCommand,
) -> Task<LoginEffect> {
    Task::batch(effects(state, command).into_iter().map(Task::done))
}

fn effects(state: &mut LoginState, command: LoginCommand) -> Vec<LoginEffect> {
    match command {
        LoginCommand::EmailChanged(email) => {
            state.set_email(email);
            Vec::new()
        },
        LoginCommand::PasswordChanged(password) => {
            state.set_password(password);
            Vec::new()
        },
        LoginCommand::Submit => submit(state),
        LoginCommand::SignInWithProvider(provider) => {
            if state.is_loading() {
                return Vec::new();
            }
            state.set_loading(true);
            vec![LoginEffect::ProviderSignInRequested { provider }]
        },
        LoginCommand::OpenRegister => vec![LoginEffect::Navigate {
            path: String::from(REGISTER_PATH),
        }],
        LoginCommand::SignInCompleted(outcome) => completed(state, outcome),
        LoginCommand::SignInFailed { message } => {
            if !state.is_loading() {
                return Vec::new();
            }
            log::warn!("sign-in failed: {message}");
            state.set_loading(false);
            vec![LoginEffect::Notify(Notice::error(message))]
        },
        LoginCommand::Reset => {
            state.reset();
            Vec::new()
        },
    }
}

fn submit(state: &mut LoginState) -> Vec<LoginEffect> {
    if state.is_loading() {
        return Vec::new();
    }

    let Some(credentials) = state.validated_credentials() else {
        return Vec::new();
    };
    state.set_loading(true);
    vec![LoginEffect::SignInRequested { credentials }]
}

fn completed(state: &mut LoginState, outcome: SignInOutcome) -> Vec<LoginEffect> {
    if !state.is_loading() {
        return Vec::new();
    }

    match outcome {
        SignInOutcome::SignedIn(user) => {
            state.reset();
            vec![LoginEffect::SessionEstablished { user }]
        },
        SignInOutcome::Redirect { url } => {
            state.set_loading(false);
            vec![
                LoginEffect::OpenBrowser { url },
                LoginEffect::Notify(Notice::info(
                    "Continue signing in from your browser",
                )),
            ]
        },
    }
}

#[cfg(test)]
mod tests {
    use pase_session::{Provider, User};
    use secrecy::ExposeSecret;
    use uuid::Uuid;

    use super::*;
    use crate::shared::validation::FieldError;
    use crate::widgets::toast::NoticeKind;

    fn filled_state() -> LoginState {
        let mut state = LoginState::default();
        effects(
            &mut state,
            LoginCommand::EmailChanged(String::from(" ada@example.com ")),
        );
        effects(
            &mut state,
            LoginCommand::PasswordChanged(String::from("secret1")),
        );
        state
    }

    #[test]
    fn given_empty_form_when_submitted_then_fields_report_required() {
        let mut state = LoginState::default();

        let result = effects(&mut state, LoginCommand::Submit);

        assert!(result.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.email_error(), Some(FieldError::Required));
        assert_eq!(state.password_error(), Some(FieldError::Required));
    }

    #[test]
    fn given_invalid_email_when_submitted_then_nothing_is_sent() {
        let mut state = filled_state();
        effects(&mut state, LoginCommand::EmailChanged(String::from("ada")));

        let result = effects(&mut state, LoginCommand::Submit);

        assert!(result.is_empty());
        assert_eq!(state.email_error(), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn given_valid_form_when_submitted_then_trimmed_credentials_are_sent() {
        let mut state = filled_state();

        let result = effects(&mut state, LoginCommand::Submit);

        let [LoginEffect::SignInRequested { credentials }] = result.as_slice()
        else {
            panic!("expected a sign-in request, got {result:?}");
        };
        assert_eq!(credentials.email, "ada@example.com");
        assert_eq!(credentials.password.expose_secret(), "secret1");
        assert!(state.is_loading());
    }

    #[test]
    fn given_pending_request_when_submitted_again_then_second_is_dropped() {
        let mut state = filled_state();
        effects(&mut state, LoginCommand::Submit);

        let result = effects(&mut state, LoginCommand::Submit);

        assert!(result.is_empty());
    }

    #[test]
    fn given_rejection_then_form_is_enabled_and_error_is_shown() {
        let mut state = filled_state();
        effects(&mut state, LoginCommand::Submit);

        let result = effects(
            &mut state,
            LoginCommand::SignInFailed {
                message: String::from("Invalid login credentials"),
            },
        );

        assert!(!state.is_loading());
        assert_eq!(state.email(), " ada@example.com ");
        let [LoginEffect::Notify(notice)] = result.as_slice() else {
            panic!("expected a notification, got {result:?}");
        };
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Invalid login credentials");
    }

    #[test]
    fn given_success_then_session_is_established_and_form_cleared() {
        let mut state = filled_state();
        effects(&mut state, LoginCommand::Submit);
        let user = User {
            id: Uuid::new_v4(),
            email: Some(String::from("ada@example.com")),
        };

        let result = effects(
            &mut state,
            LoginCommand::SignInCompleted(SignInOutcome::SignedIn(user.clone())),
        );

        assert!(matches!(
            result.as_slice(),
            [LoginEffect::SessionEstablished { user: established }]
                if *established == user
        ));
        assert_eq!(state.email(), "");
        assert!(state.password().expose_secret().is_empty());
    }

    #[test]
    fn given_provider_redirect_then_browser_opens_with_info_notice() {
        let mut state = LoginState::default();
        effects(
            &mut state,
            LoginCommand::SignInWithProvider(Provider::Google),
        );

        let result = effects(
            &mut state,
            LoginCommand::SignInCompleted(SignInOutcome::Redirect {
                url: String::from("https://auth.example/authorize"),
            }),
        );

        assert!(!state.is_loading());
        assert!(matches!(
            result.as_slice(),
            [
                LoginEffect::OpenBrowser { url },
                LoginEffect::Notify(notice),
            ] if url == "https://auth.example/authorize"
                && notice.kind == NoticeKind::Info
        ));
    }

    #[test]
    fn given_register_link_then_navigation_to_register() {
        let mut state = LoginState::default();

        let result = effects(&mut state, LoginCommand::OpenRegister);

        assert!(matches!(
            result.as_slice(),
            [LoginEffect::Navigate { path }] if path == "/register"
        ));
    }
}
