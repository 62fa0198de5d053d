use serde::Deserialize;
use validator::Validate;

/// JSON payload submitted when requesting an auth token.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
