use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ingredients as ingredient_service;

#[derive(Debug, Deserialize)]
pub struct IngredientQuery {
    /// Case-insensitive search on the ingredient name.
    pub name: Option<String>,
    pub page: Option<usize>,
}

#[get("/ingredients")]
pub async fn list_ingredients(
    repo: web::Data<DieselRepository>,
    params: web::Query<IngredientQuery>,
) -> impl Responder {
    let params = params.into_inner();
    match ingredient_service::list_ingredients(repo.get_ref(), params.name, params.page) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("Failed to list ingredients", err),
    }
}

#[get("/ingredients/{id}")]
pub async fn get_ingredient(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match ingredient_service::get_ingredient(repo.get_ref(), path.into_inner()) {
        Ok(ingredient) => HttpResponse::Ok().json(ingredient),
        Err(err) => error_response("Failed to load ingredient", err),
    }
}

/// Bulk catalog upload. The body is a headerless `name,measurement_unit` CSV.
#[post("/ingredients/upload")]
pub async fn upload_ingredients(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match ingredient_service::upload_ingredients(repo.get_ref(), &user, &body) {
        Ok(inserted) => HttpResponse::Created().json(serde_json::json!({ "inserted": inserted })),
        Err(err) => error_response("Failed to upload ingredients", err),
    }
}
