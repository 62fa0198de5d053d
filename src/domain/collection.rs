use chrono::NaiveDateTime;
use serde::Serialize;

/// Per-user recipe collection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Favorites,
    Cart,
}

/// Membership row of a user's favorites or cart.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionEntry {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    pub created_at: NaiveDateTime,
}

/// One ingredient row of a recipe currently in a user's cart, in stable
/// storage order. Input to the shopping-list aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartIngredientRow {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}
