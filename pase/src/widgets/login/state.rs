use pase_session::Credentials;
use secrecy::{ExposeSecret, SecretString};

use crate::shared::validation::{FieldError, validate_email, validate_required};

/// Login form state. The password never leaves a `SecretString`.
#[derive(Debug)]
pub(crate) struct LoginState {
    email: String,
    password: SecretString,
    loading: bool,
    email_error: Option<FieldError>,
    password_error: Option<FieldError>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(String::new()),
            loading: false,
            email_error: None,
            password_error: None,
        }
    }
}

impl LoginState {
    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn email_error(&self) -> Option<FieldError> {
        self.email_error
    }

    pub(crate) fn password_error(&self) -> Option<FieldError> {
        self.password_error
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
        self.email_error = None;
    }

    pub(crate) fn set_password(&mut self, password: String) {
        self.password = SecretString::from(password);
        self.password_error = None;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Validate the fields, recording errors. Returns the credentials to
    /// submit when every field is valid.
    pub(crate) fn validated_credentials(&mut self) -> Option<Credentials> {
        self.email_error = validate_email(&self.email).err();
        self.password_error =
            validate_required(self.password.expose_secret()).err();
        if self.email_error.is_some() || self.password_error.is_some() {
            return None;
        }

        Some(Credentials::new(
            self.email.trim(),
            SecretString::from(self.password.expose_secret().to_owned()),
        ))
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
