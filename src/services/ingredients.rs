use crate::auth::AuthenticatedUser;
use crate::domain::ingredient::{Ingredient, IngredientListQuery};
use crate::forms::ingredients::parse_ingredients_csv;
use crate::pagination::Paginated;
use crate::repository::{IngredientReader, IngredientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists catalog ingredients, optionally filtered by a name search term.
pub fn list_ingredients<R>(
    repo: &R,
    search: Option<String>,
    page: Option<usize>,
) -> ServiceResult<Paginated<Ingredient>>
where
    R: IngredientReader + ?Sized,
{
    let mut query = IngredientListQuery::new();
    if let Some(term) = search.filter(|term| !term.trim().is_empty()) {
        query = query.search(term.trim().to_string());
    }
    let page = page.unwrap_or(1).max(1);
    query = query.paginate(page, crate::pagination::DEFAULT_ITEMS_PER_PAGE);

    let (total, items) = repo.list_ingredients(query).map_err(ServiceError::from)?;

    Ok(Paginated::new(
        items,
        page,
        total,
        crate::pagination::DEFAULT_ITEMS_PER_PAGE,
    ))
}

/// Loads a single catalog ingredient by id.
pub fn get_ingredient<R>(repo: &R, ingredient_id: i32) -> ServiceResult<Ingredient>
where
    R: IngredientReader + ?Sized,
{
    repo.get_ingredient_by_id(ingredient_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Bulk-loads a CSV ingredient catalog. Reference data is admin-managed.
///
/// Returns the number of rows inserted; rows that collide with an existing
/// (name, unit) pair are skipped by the storage layer.
pub fn upload_ingredients<R>(
    repo: &R,
    user: &AuthenticatedUser,
    csv_bytes: &[u8],
) -> ServiceResult<usize>
where
    R: IngredientWriter + ?Sized,
{
    if !user.is_admin {
        return Err(ServiceError::Unauthorized);
    }

    let ingredients =
        parse_ingredients_csv(csv_bytes).map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_ingredients(&ingredients)
        .map_err(ServiceError::from)
}
