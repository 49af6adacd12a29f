use pase_session::{Provider, SignInOutcome};

/// Commands processed by the register reducer.
#[derive(Debug, Clone)]
pub(crate) enum RegisterCommand {
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmChanged(String),
    Submit,
    SignUpWithProvider(Provider),
    OpenLogin,
    Undo,
    SignUpCompleted { email: String },
    SignUpFailed { message: String },
    ProviderCompleted(SignInOutcome),
    ProviderFailed { message: String },
}
