use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::domain::recipe::RecipeListQuery;
use crate::domain::user::Subscription;
use crate::repository::{RecipeReader, SubscriptionReader, SubscriptionWriter, UserReader};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the subscription list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SubscriptionQuery {
    /// Cap on the number of recipes embedded per author.
    pub recipes_limit: Option<usize>,
}

/// Compact recipe block embedded in subscription responses.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeShort {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

/// One followed author together with a sample of their recipes.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribedAuthor {
    pub email: String,
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeShort>,
    pub recipes_count: usize,
}

/// Subscribes the caller to an author.
///
/// Self-subscription violates the follower != followed invariant; an existing
/// pair surfaces as [`ServiceError::AlreadyExists`] via the unique constraint.
pub fn subscribe<R>(
    repo: &R,
    user: &AuthenticatedUser,
    author_id: i32,
) -> ServiceResult<Subscription>
where
    R: SubscriptionWriter + UserReader + ?Sized,
{
    if author_id == user.id {
        return Err(ServiceError::InvalidField {
            field: "author_id",
            message: "нельзя подписаться на себя самого".to_string(),
        });
    }

    repo.get_user_by_id(author_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.create_subscription(user.id, author_id)
        .map_err(ServiceError::from)
}

/// Removes the caller's subscription to an author.
pub fn unsubscribe<R>(repo: &R, user: &AuthenticatedUser, author_id: i32) -> ServiceResult<()>
where
    R: SubscriptionWriter + ?Sized,
{
    repo.delete_subscription(user.id, author_id)
        .map_err(ServiceError::from)
}

/// Lists the authors the caller follows, each with their recipes.
pub fn list_subscriptions<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: SubscriptionQuery,
) -> ServiceResult<Vec<SubscribedAuthor>>
where
    R: SubscriptionReader + RecipeReader + ?Sized,
{
    let authors = repo
        .list_subscribed_authors(user.id)
        .map_err(ServiceError::from)?;

    let mut payloads = Vec::with_capacity(authors.len());
    for author in authors {
        let (_, recipes) = repo
            .list_recipes(RecipeListQuery::new().author(author.id))
            .map_err(ServiceError::from)?;
        let recipes_count = repo
            .count_recipes_by_author(author.id)
            .map_err(ServiceError::from)?;

        let mut recipes: Vec<RecipeShort> = recipes
            .into_iter()
            .map(|recipe| RecipeShort {
                id: recipe.id,
                name: recipe.name,
                image: recipe.image,
                cooking_time: recipe.cooking_time,
            })
            .collect();
        if let Some(limit) = query.recipes_limit {
            recipes.truncate(limit);
        }

        payloads.push(SubscribedAuthor {
            email: author.email,
            id: author.id,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: true,
            recipes,
            recipes_count,
        });
    }

    Ok(payloads)
}
