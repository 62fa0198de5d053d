use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod collections;
pub mod ingredients;
pub mod recipes;
pub mod shopping_list;
pub mod subscriptions;
pub mod tags;
pub mod users;

/// Result type returned by all service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer and mapped to HTTP responses by the
/// route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller is not allowed to perform the operation.
    #[error("недостаточно прав")]
    Unauthorized,
    /// The targeted record does not exist.
    #[error("объект не найден")]
    NotFound,
    /// A uniqueness guard rejected the operation.
    #[error("запись уже существует")]
    AlreadyExists,
    /// The shopping cart holds no recipes, so no list can be produced.
    #[error("в списке покупок нет ни одного рецепта")]
    EmptyCart,
    /// The same ingredient was submitted twice for one recipe.
    #[error("ингредиент {0} указан в рецепте более одного раза")]
    DuplicateIngredient(i32),
    /// The same tag was submitted twice for one recipe.
    #[error("тег {0} указан в рецепте более одного раза")]
    DuplicateTag(i32),
    /// A scalar field failed validation; the message is field-attributed.
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    /// Payload-shape validation failure.
    #[error("{0}")]
    Form(String),
    /// Unexpected failure outside the persistence layer, e.g. media IO.
    #[error("внутренняя ошибка: {0}")]
    Internal(String),
    /// Persistence failure with no more specific mapping.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::AlreadyExists,
            other => ServiceError::Repository(other),
        }
    }
}
