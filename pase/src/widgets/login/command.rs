use pase_session::{Provider, SignInOutcome};

/// Commands processed by the login reducer.
#[derive(Debug, Clone)]
pub(crate) enum LoginCommand {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    SignInWithProvider(Provider),
    OpenRegister,
    SignInCompleted(SignInOutcome),
    SignInFailed { message: String },
    Reset,
}
