use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::domain::collection::CollectionKind;
use crate::domain::recipe::{
    IngredientEntry, NewRecipe, Recipe, RecipeIngredient, RecipeListQuery, UpdateRecipe,
};
use crate::domain::tag::Tag;
use crate::forms::recipes::{Base64Image, RecipeForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    CollectionReader, IngredientReader, RecipeReader, RecipeWriter, SubscriptionReader, TagReader,
    UserReader,
};
use crate::services::{ServiceError, ServiceResult};
use crate::{MIN_COOKING_TIME, MIN_INGREDIENT_AMOUNT};

/// Query parameters accepted by the recipe list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    /// Page number requested by the client (1-based).
    pub page: Option<usize>,
    /// Page size override.
    pub limit: Option<usize>,
    /// Restrict to recipes of one author.
    pub author: Option<i32>,
    /// Tag slugs, repeated as `tags=a&tags=b`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// When `1`, restrict to the caller's favorites.
    pub is_favorited: Option<u8>,
    /// When `1`, restrict to the caller's cart.
    pub is_in_shopping_cart: Option<u8>,
}

/// Author block embedded in recipe responses.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorPayload {
    pub email: String,
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

/// Full recipe representation returned by the read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RecipePayload {
    pub id: i32,
    pub tags: Vec<Tag>,
    pub author: AuthorPayload,
    pub ingredients: Vec<RecipeIngredient>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: Option<String>,
    pub text: String,
    pub cooking_time: i32,
}

/// Validates the cross-field recipe payload rules before any write.
fn validate_recipe_payload<R>(
    repo: &R,
    entries: &[IngredientEntry],
    tag_ids: &[i32],
    cooking_time: i32,
) -> ServiceResult<()>
where
    R: IngredientReader + TagReader + ?Sized,
{
    if cooking_time < MIN_COOKING_TIME {
        return Err(ServiceError::InvalidField {
            field: "cooking_time",
            message: format!("время приготовления не может быть меньше {MIN_COOKING_TIME}"),
        });
    }

    if entries.is_empty() {
        return Err(ServiceError::InvalidField {
            field: "ingredients",
            message: "рецепт должен содержать хотя бы один ингредиент".to_string(),
        });
    }

    let mut seen_ingredients = HashSet::new();
    for entry in entries {
        if !seen_ingredients.insert(entry.ingredient_id) {
            return Err(ServiceError::DuplicateIngredient(entry.ingredient_id));
        }
        if entry.amount < MIN_INGREDIENT_AMOUNT {
            return Err(ServiceError::InvalidField {
                field: "ingredients",
                message: format!(
                    "количество ингредиента {} не может быть меньше {MIN_INGREDIENT_AMOUNT}",
                    entry.ingredient_id
                ),
            });
        }
    }

    let ingredient_ids: Vec<i32> = entries.iter().map(|entry| entry.ingredient_id).collect();
    let known = repo
        .get_ingredients_by_ids(&ingredient_ids)
        .map_err(ServiceError::from)?;
    if known.len() != ingredient_ids.len() {
        let known_ids: HashSet<i32> = known.iter().map(|ingredient| ingredient.id).collect();
        let missing = ingredient_ids
            .iter()
            .find(|id| !known_ids.contains(id))
            .copied()
            .unwrap_or_default();
        return Err(ServiceError::InvalidField {
            field: "ingredients",
            message: format!("ингредиент {missing} не найден"),
        });
    }

    if tag_ids.is_empty() {
        return Err(ServiceError::InvalidField {
            field: "tags",
            message: "рецепт должен содержать хотя бы один тег".to_string(),
        });
    }

    let mut seen_tags = HashSet::new();
    for tag_id in tag_ids {
        if !seen_tags.insert(*tag_id) {
            return Err(ServiceError::DuplicateTag(*tag_id));
        }
    }

    let known_tags = repo.get_tags_by_ids(tag_ids).map_err(ServiceError::from)?;
    if known_tags.len() != tag_ids.len() {
        let known_ids: HashSet<i32> = known_tags.iter().map(|tag| tag.id).collect();
        let missing = tag_ids
            .iter()
            .find(|id| !known_ids.contains(id))
            .copied()
            .unwrap_or_default();
        return Err(ServiceError::InvalidField {
            field: "tags",
            message: format!("тег {missing} не найден"),
        });
    }

    Ok(())
}

/// Decodes the base64 photo and writes it under the media root, returning
/// the stored relative path.
fn store_image(media_root: &Path, data_url: &str) -> ServiceResult<String> {
    let image = Base64Image::parse(data_url).map_err(|err| ServiceError::InvalidField {
        field: "image",
        message: err.to_string(),
    })?;

    let relative = format!("recipes/{}.{}", Uuid::new_v4(), image.extension);
    let target = media_root.join(&relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| ServiceError::Internal(format!("media dir: {err}")))?;
    }
    fs::write(&target, &image.bytes)
        .map_err(|err| ServiceError::Internal(format!("media write: {err}")))?;

    Ok(relative)
}

/// Creates a recipe together with its tag and ingredient associations.
///
/// All validation happens before any write; persistence is a single
/// transaction inside the repository.
pub fn create_recipe<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: RecipeForm,
    media_root: &Path,
) -> ServiceResult<Recipe>
where
    R: RecipeWriter + IngredientReader + TagReader + ?Sized,
{
    form.validate_shape()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let entries = form.ingredient_entries();
    validate_recipe_payload(repo, &entries, &form.tags, form.cooking_time)?;

    let Some(data_url) = form.image.as_deref() else {
        return Err(ServiceError::InvalidField {
            field: "image",
            message: "обязательное поле".to_string(),
        });
    };
    let image = store_image(media_root, data_url)?;

    let new_recipe = NewRecipe {
        author_id: user.id,
        name: form.name.trim().to_string(),
        text: form.text,
        image: Some(image),
        cooking_time: form.cooking_time,
        ingredients: entries,
        tag_ids: form.tags,
    };

    repo.create_recipe(&new_recipe).map_err(ServiceError::from)
}

/// Updates a recipe, replacing its tag and ingredient sets wholesale.
///
/// Only the author or an admin may update; the photo is kept when the
/// payload omits it.
pub fn update_recipe<R>(
    repo: &R,
    user: &AuthenticatedUser,
    recipe_id: i32,
    form: RecipeForm,
    media_root: &Path,
) -> ServiceResult<Recipe>
where
    R: RecipeReader + RecipeWriter + IngredientReader + TagReader + ?Sized,
{
    let existing = repo
        .get_recipe_by_id(recipe_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if existing.author_id != user.id && !user.is_admin {
        return Err(ServiceError::Unauthorized);
    }

    form.validate_shape()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let entries = form.ingredient_entries();
    validate_recipe_payload(repo, &entries, &form.tags, form.cooking_time)?;

    let image = match form.image.as_deref() {
        Some(data_url) => Some(Some(store_image(media_root, data_url)?)),
        None => None,
    };

    let updates = UpdateRecipe {
        name: form.name.trim().to_string(),
        text: form.text,
        image,
        cooking_time: form.cooking_time,
        ingredients: entries,
        tag_ids: form.tags,
        updated_at: Utc::now().naive_utc(),
    };

    repo.update_recipe(recipe_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a recipe; association rows cascade.
pub fn remove_recipe<R>(repo: &R, user: &AuthenticatedUser, recipe_id: i32) -> ServiceResult<()>
where
    R: RecipeReader + RecipeWriter + ?Sized,
{
    let existing = repo
        .get_recipe_by_id(recipe_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if existing.author_id != user.id && !user.is_admin {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_recipe(recipe_id).map_err(ServiceError::from)
}

/// Builds the read representation of one recipe for the given viewer.
pub fn assemble_recipe<R>(
    repo: &R,
    viewer: Option<&AuthenticatedUser>,
    recipe: Recipe,
) -> ServiceResult<RecipePayload>
where
    R: UserReader + SubscriptionReader + CollectionReader + ?Sized,
{
    let author = repo
        .get_user_by_id(recipe.author_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let (is_subscribed, is_favorited, is_in_shopping_cart) = match viewer {
        Some(viewer) => (
            repo.is_subscribed(viewer.id, author.id)?,
            repo.collection_contains(CollectionKind::Favorites, viewer.id, recipe.id)?,
            repo.collection_contains(CollectionKind::Cart, viewer.id, recipe.id)?,
        ),
        None => (false, false, false),
    };

    Ok(RecipePayload {
        id: recipe.id,
        tags: recipe.tags,
        author: AuthorPayload {
            email: author.email,
            id: author.id,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed,
        },
        ingredients: recipe.ingredients,
        is_favorited,
        is_in_shopping_cart,
        name: recipe.name,
        image: recipe.image,
        text: recipe.text,
        cooking_time: recipe.cooking_time,
    })
}

/// Loads one recipe in its read representation.
pub fn get_recipe<R>(
    repo: &R,
    viewer: Option<&AuthenticatedUser>,
    recipe_id: i32,
) -> ServiceResult<RecipePayload>
where
    R: RecipeReader + UserReader + SubscriptionReader + CollectionReader + ?Sized,
{
    let recipe = repo
        .get_recipe_by_id(recipe_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    assemble_recipe(repo, viewer, recipe)
}

/// Loads the paginated, filtered recipe feed.
pub fn list_recipes<R>(
    repo: &R,
    viewer: Option<&AuthenticatedUser>,
    query: RecipeQuery,
) -> ServiceResult<Paginated<RecipePayload>>
where
    R: RecipeReader + UserReader + SubscriptionReader + CollectionReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);

    let mut list_query = RecipeListQuery::new().tags(query.tags);

    if let Some(author) = query.author {
        list_query = list_query.author(author);
    }

    // Membership filters only apply to an authenticated caller.
    if let Some(viewer) = viewer {
        if query.is_favorited == Some(1) {
            list_query = list_query.favorited_by(viewer.id);
        }
        if query.is_in_shopping_cart == Some(1) {
            list_query = list_query.in_cart_of(viewer.id);
        }
    }

    list_query = list_query.paginate(page, per_page);

    let (total, recipes) = repo.list_recipes(list_query).map_err(ServiceError::from)?;

    let mut payloads = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        payloads.push(assemble_recipe(repo, viewer, recipe)?);
    }

    Ok(Paginated::new(payloads, page, total, per_page))
}
