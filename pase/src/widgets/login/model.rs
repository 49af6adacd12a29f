use secrecy::SecretString;

use crate::shared::validation::FieldError;

/// View model for the login form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoginViewModel<'a> {
    pub(crate) email: &'a str,
    pub(crate) password: &'a SecretString,
    pub(crate) loading: bool,
    pub(crate) email_error: Option<FieldError>,
    pub(crate) password_error: Option<FieldError>,
}
