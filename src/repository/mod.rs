use crate::db::{DbConnection, DbPool};
use crate::domain::collection::{CartIngredientRow, CollectionEntry, CollectionKind};
use crate::domain::ingredient::{Ingredient, IngredientListQuery, NewIngredient};
use crate::domain::recipe::{NewRecipe, Recipe, RecipeListQuery, UpdateRecipe};
use crate::domain::tag::{NewTag, Tag};
use crate::domain::user::{NewUser, Subscription, User};
use crate::repository::errors::RepositoryResult;

pub mod collection;
pub mod errors;
pub mod ingredient;
pub mod recipe;
pub mod subscription;
pub mod tag;
pub mod user;

#[cfg(test)]
pub mod mock;

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over user accounts and auth tokens.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    /// Resolve the account owning an auth token, together with its password
    /// hash where the caller needs to verify credentials.
    fn get_user_by_token(&self, token: &str) -> RepositoryResult<Option<User>>;
    fn get_password_hash(&self, email: &str) -> RepositoryResult<Option<(i32, String)>>;
}

/// Write operations over user accounts and auth tokens.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn create_token(&self, user_id: i32, token: &str) -> RepositoryResult<()>;
    fn delete_token(&self, token: &str) -> RepositoryResult<()>;
}

/// Read-only operations over author subscriptions.
pub trait SubscriptionReader {
    fn is_subscribed(&self, user_id: i32, author_id: i32) -> RepositoryResult<bool>;
    /// Authors the user follows, in subscription order.
    fn list_subscribed_authors(&self, user_id: i32) -> RepositoryResult<Vec<User>>;
}

/// Write operations over author subscriptions.
pub trait SubscriptionWriter {
    fn create_subscription(&self, user_id: i32, author_id: i32) -> RepositoryResult<Subscription>;
    fn delete_subscription(&self, user_id: i32, author_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over the tag catalog.
pub trait TagReader {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
    fn get_tags_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Tag>>;
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
}

/// Write operations over the tag catalog.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
}

/// Read-only operations over the ingredient catalog.
pub trait IngredientReader {
    fn get_ingredient_by_id(&self, id: i32) -> RepositoryResult<Option<Ingredient>>;
    fn get_ingredients_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Ingredient>>;
    fn list_ingredients(
        &self,
        query: IngredientListQuery,
    ) -> RepositoryResult<(usize, Vec<Ingredient>)>;
}

/// Write operations over the ingredient catalog.
pub trait IngredientWriter {
    fn create_ingredients(&self, new_ingredients: &[NewIngredient]) -> RepositoryResult<usize>;
}

/// Read-only operations over recipes and their associations.
pub trait RecipeReader {
    fn get_recipe_by_id(&self, id: i32) -> RepositoryResult<Option<Recipe>>;
    fn list_recipes(&self, query: RecipeListQuery) -> RepositoryResult<(usize, Vec<Recipe>)>;
    fn count_recipes_by_author(&self, author_id: i32) -> RepositoryResult<usize>;
}

/// Write operations over recipes. Creation and update persist the recipe row
/// together with its tag and ingredient associations in one transaction.
pub trait RecipeWriter {
    fn create_recipe(&self, new_recipe: &NewRecipe) -> RepositoryResult<Recipe>;
    fn update_recipe(&self, recipe_id: i32, updates: &UpdateRecipe) -> RepositoryResult<Recipe>;
    fn delete_recipe(&self, recipe_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over favorites and cart membership.
pub trait CollectionReader {
    fn collection_contains(
        &self,
        kind: CollectionKind,
        user_id: i32,
        recipe_id: i32,
    ) -> RepositoryResult<bool>;
    /// Ingredient rows of every recipe in the user's cart, joined to the
    /// catalog, in stable insertion order.
    fn cart_ingredient_rows(&self, user_id: i32) -> RepositoryResult<Vec<CartIngredientRow>>;
}

/// Write operations over favorites and cart membership.
pub trait CollectionWriter {
    fn add_collection_entry(
        &self,
        kind: CollectionKind,
        user_id: i32,
        recipe_id: i32,
    ) -> RepositoryResult<CollectionEntry>;
    fn remove_collection_entry(
        &self,
        kind: CollectionKind,
        user_id: i32,
        recipe_id: i32,
    ) -> RepositoryResult<()>;
}
