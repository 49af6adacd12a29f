use thiserror::Error;

/// Validation failure of a single auth form field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub(crate) enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    Conflict,
}

/// Check an email field: required, and shaped like `local@domain.tld`.
pub(crate) fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::Required);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(FieldError::InvalidEmail);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty()
        || !domain_ok
        || domain.contains('@')
        || email.chars().any(char::is_whitespace)
    {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Check that a field holds something other than whitespace.
pub(crate) fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}
