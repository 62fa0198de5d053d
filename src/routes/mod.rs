use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod auth;
pub mod ingredients;
pub mod recipes;
pub mod tags;
pub mod users;

/// Maps a service failure onto an HTTP response.
///
/// Handlers match the variants they answer specially and fall back to this
/// for the rest. `context` names the failed operation in the server log.
pub fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Forbidden().json(json!({ "detail": err.to_string() }))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "detail": err.to_string() }))
        }
        ServiceError::AlreadyExists
        | ServiceError::EmptyCart
        | ServiceError::DuplicateIngredient(_)
        | ServiceError::DuplicateTag(_)
        | ServiceError::InvalidField { .. }
        | ServiceError::Form(_) => {
            HttpResponse::BadRequest().json(json!({ "errors": err.to_string() }))
        }
        err => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
