use argon2::{Argon2, PasswordHash, PasswordVerifier};
use uuid::Uuid;
use validator::Validate;

use crate::forms::auth::LoginForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Checks a candidate password against a stored Argon2 PHC string.
pub fn verify_password(password: &str, stored_hash: &str) -> ServiceResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| ServiceError::Internal(format!("stored password hash: {err}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Issues a fresh opaque token for valid credentials.
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<String>
where
    R: UserReader + UserWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let email = form.email.trim().to_lowercase();
    let (user_id, stored_hash) = repo
        .get_password_hash(&email)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&form.password, &stored_hash)? {
        return Err(ServiceError::Unauthorized);
    }

    let token = Uuid::new_v4().simple().to_string();
    repo.create_token(user_id, &token)
        .map_err(ServiceError::from)?;

    Ok(token)
}

/// Revokes the presented token.
pub fn logout<R>(repo: &R, token: &str) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    repo.delete_token(token).map_err(ServiceError::from)
}
