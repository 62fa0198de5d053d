use actix_web::{HttpResponse, Responder, get, post, web};

use crate::auth::AuthenticatedUser;
use crate::forms::tags::AddTagForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tags as tag_service;

#[get("/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match tag_service::list_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => error_response("Failed to list tags", err),
    }
}

#[get("/tags/{id}")]
pub async fn get_tag(repo: web::Data<DieselRepository>, path: web::Path<i32>) -> impl Responder {
    match tag_service::get_tag(repo.get_ref(), path.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response("Failed to load tag", err),
    }
}

#[post("/tags")]
pub async fn add_tag(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTagForm>,
) -> impl Responder {
    match tag_service::create_tag(repo.get_ref(), &user, form.into_inner()) {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(err) => error_response("Failed to create tag", err),
    }
}
