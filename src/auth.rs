use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error, web};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::repository::{DieselRepository, UserReader};

/// Identity resolved from the `Authorization: Token <key>` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_admin: user.is_admin,
        }
    }
}

/// Extract the bearer token from the `Authorization` header, if present.
pub fn token_from_request(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Token ")
        .map(str::trim)
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token) = token_from_request(req) else {
            return ready(Err(error::ErrorUnauthorized("authentication required")));
        };

        let Some(repo) = req.app_data::<web::Data<DieselRepository>>() else {
            return ready(Err(error::ErrorInternalServerError("repository missing")));
        };

        let result = match repo.get_user_by_token(token) {
            Ok(Some(user)) => Ok(user.into()),
            Ok(None) => Err(error::ErrorUnauthorized("invalid token")),
            Err(err) => {
                log::error!("Failed to resolve auth token: {err}");
                Err(error::ErrorInternalServerError("authentication failed"))
            }
        };

        ready(result)
    }
}
