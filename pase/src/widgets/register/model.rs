use secrecy::SecretString;

use crate::shared::validation::FieldError;

/// Which registration screen is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RegisterStage {
    Form,
    /// Waiting for the user to follow the emailed confirmation link.
    AwaitingConfirmation { email: String },
}

/// View model for the registration screens.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegisterViewModel<'a> {
    pub(crate) stage: &'a RegisterStage,
    pub(crate) email: &'a str,
    pub(crate) password: &'a SecretString,
    pub(crate) confirm: &'a SecretString,
    pub(crate) loading: bool,
    pub(crate) email_error: Option<FieldError>,
    pub(crate) password_error: Option<FieldError>,
    pub(crate) confirm_error: Option<FieldError>,
}
