use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::domain::user::User;
use crate::forms::users::RegisterUserForm;
use crate::repository::{SubscriptionReader, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Public profile representation.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub email: String,
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

/// Hash a password with Argon2 and a fresh salt.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| ServiceError::Internal(format!("password hashing: {err}")))?;

    Ok(hash.to_string())
}

/// Registers a new account. Favorites and cart membership are plain
/// (user, recipe) rows, so no per-user initialization is needed beyond the
/// account row itself.
pub fn register_user<R>(repo: &R, form: RegisterUserForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let password = form.password.clone();
    let new_user = form
        .into_new_user(String::new())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    // Hash only after the payload is known to be valid.
    let new_user = crate::domain::user::NewUser {
        password_hash: hash_password(&password)?,
        ..new_user
    };

    repo.create_user(&new_user).map_err(ServiceError::from)
}

/// Loads a public profile, with the subscription flag relative to the viewer.
pub fn get_profile<R>(
    repo: &R,
    viewer: Option<&AuthenticatedUser>,
    user_id: i32,
) -> ServiceResult<UserPayload>
where
    R: UserReader + SubscriptionReader + ?Sized,
{
    let user = repo
        .get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let is_subscribed = match viewer {
        Some(viewer) => repo.is_subscribed(viewer.id, user.id)?,
        None => false,
    };

    Ok(UserPayload {
        email: user.email,
        id: user.id,
        username: user.username,
        first_name: user.first_name,
        last_name: user.last_name,
        is_subscribed,
    })
}
