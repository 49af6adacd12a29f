use pase_session::Credentials;
use secrecy::{ExposeSecret, SecretString};

use super::model::RegisterStage;
use crate::shared::validation::{FieldError, validate_email, validate_required};

/// Registration form state.
#[derive(Debug)]
pub(crate) struct RegisterState {
    stage: RegisterStage,
    email: String,
    password: SecretString,
    confirm: SecretString,
    loading: bool,
    email_error: Option<FieldError>,
    password_error: Option<FieldError>,
    confirm_error: Option<FieldError>,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self {
            stage: RegisterStage::Form,
            email: String::new(),
            password: SecretString::from(String::new()),
            confirm: SecretString::from(String::new()),
            loading: false,
            email_error: None,
            password_error: None,
            confirm_error: None,
        }
    }
}

impl RegisterState {
    pub(crate) fn stage(&self) -> &RegisterStage {
        &self.stage
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }

    pub(crate) fn confirm(&self) -> &SecretString {
        &self.confirm
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

    pub(crate) fn confirm_error(&self) -> Option<FieldError> {
        self.confirm_error
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
        self.email_error = None;
    }

    /// Editing either password field clears both password errors.
    pub(crate) fn set_password(&mut self, password: String) {
        self.password = SecretString::from(password);
        self.clear_password_errors();
    }

    pub(crate) fn set_confirm(&mut self, confirm: String) {
        self.confirm = SecretString::from(confirm);
        self.clear_password_errors();
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn clear_password_errors(&mut self) {
        self.password_error = None;
        self.confirm_error = None;
    }

    /// Validate the form. Required checks run first; a mismatch marks both
    /// password fields.
    pub(crate) fn validated_credentials(&mut self) -> Option<Credentials> {
        self.email_error = validate_email(&self.email).err();
        self.password_error =
            validate_required(self.password.expose_secret()).err();
        self.confirm_error =
            validate_required(self.confirm.expose_secret()).err();
        if self.email_error.is_some()
            || self.password_error.is_some()
            || self.confirm_error.is_some()
        {
            return None;
        }

        if self.password.expose_secret() != self.confirm.expose_secret() {
            self.password_error = Some(FieldError::Conflict);
            self.confirm_error = Some(FieldError::Conflict);
            return None;
        }

        Some(Credentials::new(
            self.email.trim(),
            SecretString::from(self.password.expose_secret().to_owned()),
        ))
    }

    /// Switch to the confirmation screen, dropping the typed passwords.
    pub(crate) fn await_confirmation(&mut self, email: String) {
        *self = Self {
            stage: RegisterStage::AwaitingConfirmation { email },
            ..Self::default()
        };
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
