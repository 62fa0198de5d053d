use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::auth::AuthenticatedUser;
use crate::forms::users::RegisterUserForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::subscriptions::{self, SubscriptionQuery};
use crate::services::users as user_service;

#[post("/users")]
pub async fn register(
    repo: web::Data<DieselRepository>,
    form: web::Json<RegisterUserForm>,
) -> impl Responder {
    match user_service::register_user(repo.get_ref(), form.into_inner()) {
        Ok(user) => HttpResponse::Created().json(user),
        Err(err) => error_response("Failed to register user", err),
    }
}

#[get("/users/me")]
pub async fn me(user: AuthenticatedUser, repo: web::Data<DieselRepository>) -> impl Responder {
    match user_service::get_profile(repo.get_ref(), Some(&user), user.id) {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(err) => error_response("Failed to load own profile", err),
    }
}

#[get("/users/subscriptions")]
pub async fn list_subscriptions(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<SubscriptionQuery>,
) -> impl Responder {
    match subscriptions::list_subscriptions(repo.get_ref(), &user, params.into_inner()) {
        Ok(authors) => HttpResponse::Ok().json(authors),
        Err(err) => error_response("Failed to list subscriptions", err),
    }
}

#[get("/users/{id}")]
pub async fn profile(
    viewer: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match user_service::get_profile(repo.get_ref(), viewer.as_ref(), path.into_inner()) {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(err) => error_response("Failed to load profile", err),
    }
}

#[post("/users/{id}/subscribe")]
pub async fn subscribe(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match subscriptions::subscribe(repo.get_ref(), &user, path.into_inner()) {
        Ok(subscription) => HttpResponse::Created().json(subscription),
        Err(err) => error_response("Failed to subscribe", err),
    }
}

#[delete("/users/{id}/subscribe")]
pub async fn unsubscribe(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match subscriptions::unsubscribe(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to unsubscribe", err),
    }
}
