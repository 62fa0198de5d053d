use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use serde_json::json;

use crate::auth::token_from_request;
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::{ServiceError, auth as auth_service};

#[post("/auth/token/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    form: web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), form.into_inner()) {
        Ok(token) => HttpResponse::Ok().json(json!({ "auth_token": token })),
        Err(ServiceError::Unauthorized) => HttpResponse::BadRequest()
            .json(json!({ "errors": "невозможно войти с предоставленными учетными данными" })),
        Err(err) => error_response("Failed to log in", err),
    }
}

#[post("/auth/token/logout")]
pub async fn logout(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let Some(token) = token_from_request(&req) else {
        return HttpResponse::Unauthorized().finish();
    };

    match auth_service::logout(repo.get_ref(), token) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to log out", err),
    }
}
