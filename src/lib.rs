pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Smallest accepted cooking time in minutes.
pub const MIN_COOKING_TIME: i32 = 1;
/// Smallest accepted ingredient amount within a recipe.
pub const MIN_INGREDIENT_AMOUNT: i32 = 1;

/// Runtime configuration shared with the route handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory recipe photos are written to and served from.
    pub media_root: std::path::PathBuf,
}
