use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;
use crate::pagination::Pagination;

/// Domain representation of a recipe together with its associations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier of the recipe.
    pub id: i32,
    /// Identifier of the authoring user.
    pub author_id: i32,
    /// Human-readable name of the dish.
    pub name: String,
    /// Free-text preparation description.
    pub text: String,
    /// Relative media path of the uploaded photo, if any.
    pub image: Option<String>,
    /// Cooking time in minutes, always >= 1.
    pub cooking_time: i32,
    /// Ingredient rows attached to the recipe.
    pub ingredients: Vec<RecipeIngredient>,
    /// Tags attached to the recipe.
    pub tags: Vec<Tag>,
    /// Timestamp for when the recipe was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the recipe.
    pub updated_at: NaiveDateTime,
}

/// Ingredient row of a recipe, denormalized with catalog data for reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeIngredient {
    /// Catalog ingredient identifier.
    pub ingredient_id: i32,
    pub name: String,
    pub measurement_unit: String,
    /// Quantity used by the recipe, always >= 1.
    pub amount: i32,
}

/// One (ingredient, amount) entry submitted with a recipe payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientEntry {
    pub ingredient_id: i32,
    pub amount: i32,
}

/// Payload required to insert a new recipe with its associations.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub author_id: i32,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: i32,
    /// Ingredient entries, already validated for duplicates and amounts.
    pub ingredients: Vec<IngredientEntry>,
    /// Tag identifiers, already validated for duplicates.
    pub tag_ids: Vec<i32>,
}

/// Patch applied when updating an existing recipe. The ingredient and tag
/// sets, when present, replace the stored sets wholesale.
#[derive(Debug, Clone)]
pub struct UpdateRecipe {
    pub name: String,
    pub text: String,
    /// `Some(None)` clears the stored image, `None` keeps it.
    pub image: Option<Option<String>>,
    pub cooking_time: i32,
    pub ingredients: Vec<IngredientEntry>,
    pub tag_ids: Vec<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeListQuery {
    /// Restrict to recipes of one author.
    pub author_id: Option<i32>,
    /// Restrict to recipes carrying any of these tag slugs.
    pub tag_slugs: Vec<String>,
    /// Restrict to recipes favorited by this user.
    pub favorited_by: Option<i32>,
    /// Restrict to recipes in this user's cart.
    pub in_cart_of: Option<i32>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl RecipeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to recipes authored by `author_id`.
    pub fn author(mut self, author_id: i32) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Restrict the results to recipes carrying any of the given tag slugs.
    pub fn tags(mut self, slugs: Vec<String>) -> Self {
        self.tag_slugs = slugs;
        self
    }

    /// Restrict the results to recipes favorited by `user_id`.
    pub fn favorited_by(mut self, user_id: i32) -> Self {
        self.favorited_by = Some(user_id);
        self
    }

    /// Restrict the results to recipes in the cart of `user_id`.
    pub fn in_cart_of(mut self, user_id: i32) -> Self {
        self.in_cart_of = Some(user_id);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
