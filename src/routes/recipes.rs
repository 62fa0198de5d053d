use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::ServerConfig;
use crate::auth::AuthenticatedUser;
use crate::domain::collection::CollectionKind;
use crate::forms::recipes::RecipeForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::recipes::{self, RecipeQuery};
use crate::services::{collections, shopping_list};

/// Builds a [`RecipeQuery`] from raw query pairs.
///
/// `tags` repeats unbracketed (`tags=a&tags=b`), which rules out a plain
/// derived deserializer for the whole query string.
fn parse_recipe_query(pairs: &[(String, String)]) -> RecipeQuery {
    let mut query = RecipeQuery::default();
    for (key, value) in pairs {
        match key.as_str() {
            "page" => query.page = value.parse().ok(),
            "limit" => query.limit = value.parse().ok(),
            "author" => query.author = value.parse().ok(),
            "tags" => query.tags.push(value.clone()),
            "is_favorited" => query.is_favorited = value.parse().ok(),
            "is_in_shopping_cart" => query.is_in_shopping_cart = value.parse().ok(),
            _ => {}
        }
    }
    query
}

#[get("/recipes")]
pub async fn list_recipes(
    viewer: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    params: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let query = parse_recipe_query(&params.into_inner());
    match recipes::list_recipes(repo.get_ref(), viewer.as_ref(), query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("Failed to list recipes", err),
    }
}

#[post("/recipes")]
pub async fn add_recipe(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    form: web::Json<RecipeForm>,
) -> impl Responder {
    match recipes::create_recipe(repo.get_ref(), &user, form.into_inner(), &config.media_root) {
        Ok(recipe) => match recipes::assemble_recipe(repo.get_ref(), Some(&user), recipe) {
            Ok(payload) => HttpResponse::Created().json(payload),
            Err(err) => error_response("Failed to load created recipe", err),
        },
        Err(err) => error_response("Failed to create recipe", err),
    }
}

fn attachment_header(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

/// Registered ahead of `/recipes/{id}` so the literal segment wins.
#[get("/recipes/download_shopping_cart")]
pub async fn download_shopping_cart(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match shopping_list::build_shopping_list(repo.get_ref(), &user) {
        Ok(list) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .insert_header(("Content-Disposition", attachment_header(&list.filename)))
            .body(list.content),
        Err(err) => error_response("Failed to build shopping list", err),
    }
}

#[get("/recipes/{id}")]
pub async fn get_recipe(
    viewer: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match recipes::get_recipe(repo.get_ref(), viewer.as_ref(), path.into_inner()) {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(err) => error_response("Failed to load recipe", err),
    }
}

#[patch("/recipes/{id}")]
pub async fn edit_recipe(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    path: web::Path<i32>,
    form: web::Json<RecipeForm>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    match recipes::update_recipe(
        repo.get_ref(),
        &user,
        recipe_id,
        form.into_inner(),
        &config.media_root,
    ) {
        Ok(recipe) => match recipes::assemble_recipe(repo.get_ref(), Some(&user), recipe) {
            Ok(payload) => HttpResponse::Ok().json(payload),
            Err(err) => error_response("Failed to load updated recipe", err),
        },
        Err(err) => error_response("Failed to update recipe", err),
    }
}

#[delete("/recipes/{id}")]
pub async fn delete_recipe(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match recipes::remove_recipe(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to delete recipe", err),
    }
}

fn add_collection_entry(
    repo: &DieselRepository,
    user: &AuthenticatedUser,
    recipe_id: i32,
    kind: CollectionKind,
) -> HttpResponse {
    match collections::add_to_collection(repo, user, recipe_id, kind) {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(err) => error_response("Failed to add collection entry", err),
    }
}

fn remove_collection_entry(
    repo: &DieselRepository,
    user: &AuthenticatedUser,
    recipe_id: i32,
    kind: CollectionKind,
) -> HttpResponse {
    match collections::remove_from_collection(repo, user, recipe_id, kind) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to remove collection entry", err),
    }
}

#[post("/recipes/{id}/favorite")]
pub async fn add_favorite(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    add_collection_entry(
        repo.get_ref(),
        &user,
        path.into_inner(),
        CollectionKind::Favorites,
    )
}

#[delete("/recipes/{id}/favorite")]
pub async fn remove_favorite(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    remove_collection_entry(
        repo.get_ref(),
        &user,
        path.into_inner(),
        CollectionKind::Favorites,
    )
}

#[post("/recipes/{id}/shopping_cart")]
pub async fn add_to_cart(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    add_collection_entry(repo.get_ref(), &user, path.into_inner(), CollectionKind::Cart)
}

#[delete("/recipes/{id}/shopping_cart")]
pub async fn remove_from_cart(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    remove_collection_entry(repo.get_ref(), &user, path.into_inner(), CollectionKind::Cart)
}
