use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::user::NewUser;

/// Maximum allowed length for names and the username.
const NAME_MAX_LEN: u64 = 150;

/// Result type returned by the user form helpers.
pub type UserFormResult<T> = Result<T, UserFormError>;

/// Errors that can occur while processing registration payloads.
#[derive(Debug, Error)]
pub enum UserFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid = username
        .chars()
        .all(|ch| ch.is_alphanumeric() || matches!(ch, '.' | '@' | '+' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("username_charset"))
    }
}

/// JSON payload submitted when registering an account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "validate_username"))]
    pub username: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub first_name: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub last_name: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

impl RegisterUserForm {
    /// Validates the payload and pairs it with an already-computed password
    /// hash into a domain `NewUser`.
    pub fn into_new_user(self, password_hash: String) -> UserFormResult<NewUser> {
        self.validate()?;

        Ok(NewUser::new(
            self.email.trim().to_lowercase(),
            self.username.trim(),
            self.first_name.trim(),
            self.last_name.trim(),
            password_hash,
        ))
    }
}
