use pase_session::{Credentials, Provider, SignInOutcome};

use crate::widgets::toast::Notice;

/// UI events emitted by the registration screens, plus async completions.
#[derive(Debug, Clone)]
pub(crate) enum RegisterEvent {
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmChanged(String),
    Submit,
    SignUpWithProvider(Provider),
    OpenLogin,
    /// Undo on the confirmation screen.
    Undo,
    /// Account created; a confirmation email went to `email`.
    SignUpCompleted { email: String },
    SignUpFailed(String),
    ProviderCompleted(SignInOutcome),
    ProviderFailed(String),
}

/// Effect events produced by the register reducer.
#[derive(Debug, Clone)]
pub(crate) enum RegisterEffect {
    SignUpRequested { credentials: Credentials },
    ProviderSignInRequested { provider: Provider },
    OpenBrowser { url: String },
    Notify(Notice),
    Navigate { path: String },
}
