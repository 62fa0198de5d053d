use crate::auth::AuthenticatedUser;
use crate::domain::collection::{CollectionEntry, CollectionKind};
use crate::repository::{CollectionWriter, RecipeReader};
use crate::services::{ServiceError, ServiceResult};

/// Adds a recipe to the user's favorites or cart.
///
/// Fails with [`ServiceError::AlreadyExists`] when the (user, recipe) pair is
/// already present; the uniqueness guard is the storage constraint, so a
/// concurrent duplicate insert cannot create a second row.
pub fn add_to_collection<R>(
    repo: &R,
    user: &AuthenticatedUser,
    recipe_id: i32,
    kind: CollectionKind,
) -> ServiceResult<CollectionEntry>
where
    R: CollectionWriter + RecipeReader + ?Sized,
{
    repo.get_recipe_by_id(recipe_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.add_collection_entry(kind, user.id, recipe_id)
        .map_err(ServiceError::from)
}

/// Removes a recipe from the user's favorites or cart.
///
/// Fails with [`ServiceError::NotFound`] when the pair is absent.
pub fn remove_from_collection<R>(
    repo: &R,
    user: &AuthenticatedUser,
    recipe_id: i32,
    kind: CollectionKind,
) -> ServiceResult<()>
where
    R: CollectionWriter + ?Sized,
{
    repo.remove_collection_entry(kind, user.id, recipe_id)
        .map_err(ServiceError::from)
}
