use pase_session::{Credentials, Provider, SignInOutcome, User};

use crate::widgets::toast::Notice;

/// UI events emitted by the login form, plus async completions.
#[derive(Debug, Clone)]
pub(crate) enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    SignInWithProvider(Provider),
    OpenRegister,
    /// Backend accepted the sign-in request.
    SignInCompleted(SignInOutcome),
    /// Backend rejected the sign-in request.
    SignInFailed(String),
}

/// Effect events produced by the login reducer.
#[derive(Debug, Clone)]
pub(crate) enum LoginEffect {
    /// Ask the backend to sign in with a password.
    SignInRequested { credentials: Credentials },
    /// Ask the backend for a provider authorize URL.
    ProviderSignInRequested { provider: Provider },
    /// A session now exists for `user`.
    SessionEstablished { user: User },
    /// Continue the provider flow in the system browser.
    OpenBrowser { url: String },
    Notify(Notice),
    Navigate { path: String },
}
