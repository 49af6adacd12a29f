use thiserror::Error;

/// Maximum length of the account name, in characters.
pub(crate) const MAX_NAME_LENGTH: usize = 32;

/// Validation errors of the account settings form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum AccountError {
    #[error("Account name is required")]
    NameRequired,
    #[error("Account name must be at most {max} characters")]
    NameTooLong { max: usize },
}

/// Check an account name draft.
pub(crate) fn validate_name(name: &str) -> Result<(), AccountError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AccountError::NameRequired);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AccountError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_name_at_limit_then_it_is_accepted() {
        let name = "é".repeat(MAX_NAME_LENGTH);

        assert_eq!(validate_name(&name), Ok(()));
    }

    #[test]
    fn given_long_or_blank_name_then_it_is_rejected() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);

        assert_eq!(
            validate_name(&name),
            Err(AccountError::NameTooLong {
                max: MAX_NAME_LENGTH
            })
        );
        assert_eq!(validate_name("   "), Err(AccountError::NameRequired));
    }
}
