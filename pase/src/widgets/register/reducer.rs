use iced::Task;
use pase_session::SignInOutcome;

use super::command::RegisterCommand;
use super::event::RegisterEffect;
use super::model::RegisterStage;
use super::state::RegisterState;
use crate::navigation::route::LOGIN_PATH;
use crate::widgets::toast::Notice;

/// Reduce a register command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut RegisterState,
    command: RegisterCommand,
) -> Task<RegisterEffect> {
    Task::batch(effects(state, command).into_iter().map(Task::done))
}

fn effects(
    state: &mut RegisterState,
    command: RegisterCommand,
) -> Vec<RegisterEffect> {
    use RegisterCommand as C;

    match command {
        C::EmailChanged(email) => {
            state.set_email(email);
            Vec::new()
        },
        C::PasswordChanged(password) => {
            state.set_password(password);
            Vec::new()
        },
        C::ConfirmChanged(confirm) => {
            state.set_confirm(confirm);
            Vec::new()
        },
        C::Submit => submit(state),
        C::SignUpWithProvider(provider) => {
            if state.is_loading() {
                return Vec::new();
            }
            state.set_loading(true);
            vec![RegisterEffect::ProviderSignInRequested { provider }]
        },
        C::OpenLogin => vec![RegisterEffect::Navigate {
            path: String::from(LOGIN_PATH),
        }],
        C::Undo => {
            state.reset();
            Vec::new()
        },
        C::SignUpCompleted { email } => {
            if !state.is_loading() {
                return Vec::new();
            }
            log::info!("sign-up submitted, awaiting confirmation");
            state.await_confirmation(email);
            Vec::new()
        },
        C::SignUpFailed { message } | C::ProviderFailed { message } => {
            if !state.is_loading() {
                return Vec::new();
            }
            log::warn!("sign-up failed: {message}");
            state.set_loading(false);
            vec![RegisterEffect::Notify(Notice::error(message))]
        },
        C::ProviderCompleted(outcome) => {
            if !state.is_loading() {
                return Vec::new();
            }
            state.set_loading(false);
            match outcome {
                SignInOutcome::Redirect { url } => vec![
                    RegisterEffect::OpenBrowser { url },
                    RegisterEffect::Notify(Notice::info(
                        "Continue signing up from your browser",
                    )),
                ],
                SignInOutcome::SignedIn(_) => vec![RegisterEffect::Navigate {
                    path: String::from(LOGIN_PATH),
                }],
            }
        },
    }
}

fn submit(state: &mut RegisterState) -> Vec<RegisterEffect> {
    if state.is_loading() || *state.stage() != RegisterStage::Form {
        return Vec::new();
    }

    let Some(credentials) = state.validated_credentials() else {
        return Vec::new();
    };
    state.set_loading(true);
    vec![RegisterEffect::SignUpRequested { credentials }]
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;
    use crate::shared::validation::FieldError;
    use crate::widgets::toast::NoticeKind;

    fn filled(password: &str, confirm: &str) -> RegisterState {
        let mut state = RegisterState::default();
        effects(
            &mut state,
            RegisterCommand::EmailChanged(String::from("ada@example.com")),
        );
        effects(
            &mut state,
            RegisterCommand::PasswordChanged(String::from(password)),
        );
        effects(
            &mut state,
            RegisterCommand::ConfirmChanged(String::from(confirm)),
        );
        state
    }

    #[test]
    fn given_mismatched_passwords_when_submitted_then_both_fields_conflict() {
        let mut state = filled("secret1", "secret2");

        let result = effects(&mut state, RegisterCommand::Submit);

        assert!(result.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.password_error(), Some(FieldError::Conflict));
        assert_eq!(state.confirm_error(), Some(FieldError::Conflict));
    }

    #[test]
    fn given_conflict_when_either_password_is_edited_then_errors_clear() {
        let mut state = filled("secret1", "secret2");
        effects(&mut state, RegisterCommand::Submit);

        effects(
            &mut state,
            RegisterCommand::ConfirmChanged(String::from("secret1")),
        );

        assert_eq!(state.password_error(), None);
        assert_eq!(state.confirm_error(), None);
    }

    #[test]
    fn given_missing_confirm_when_submitted_then_required_wins_over_conflict() {
        let mut state = filled("secret1", "");

        effects(&mut state, RegisterCommand::Submit);

        assert_eq!(state.password_error(), None);
        assert_eq!(state.confirm_error(), Some(FieldError::Required));
    }

    #[test]
    fn given_valid_form_when_submitted_then_sign_up_is_requested() {
        let mut state = filled("secret1", "secret1");

        let result = effects(&mut state, RegisterCommand::Submit);

        let [RegisterEffect::SignUpRequested { credentials }] =
            result.as_slice()
        else {
            panic!("expected a sign-up request, got {result:?}");
        };
        assert_eq!(credentials.email, "ada@example.com");
        assert_eq!(credentials.password.expose_secret(), "secret1");
        assert!(state.is_loading());
    }

    #[test]
    fn given_completed_sign_up_then_confirmation_screen_and_undo_resets() {
        let mut state = filled("secret1", "secret1");
        effects(&mut state, RegisterCommand::Submit);

        effects(
            &mut state,
            RegisterCommand::SignUpCompleted {
                email: String::from("ada@example.com"),
            },
        );

        assert_eq!(
            *state.stage(),
            RegisterStage::AwaitingConfirmation {
                email: String::from("ada@example.com"),
            }
        );
        assert!(state.password().expose_secret().is_empty());

        effects(&mut state, RegisterCommand::Undo);

        assert_eq!(*state.stage(), RegisterStage::Form);
        assert_eq!(state.email(), "");
    }

    #[test]
    fn given_rejected_sign_up_then_error_notice_and_form_kept() {
        let mut state = filled("secret1", "secret1");
        effects(&mut state, RegisterCommand::Submit);

        let result = effects(
            &mut state,
            RegisterCommand::SignUpFailed {
                message: String::from("User already registered"),
            },
        );

        assert!(!state.is_loading());
        assert_eq!(state.email(), "ada@example.com");
        assert!(matches!(
            result.as_slice(),
            [RegisterEffect::Notify(notice)]
                if notice.kind == NoticeKind::Error
                    && notice.text == "User already registered"
        ));
    }
}
