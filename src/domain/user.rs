use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Unique email address used for login.
    pub email: String,
    /// Unique public handle.
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the user may edit recipes they do not own.
    pub is_admin: bool,
    /// Timestamp for when the account was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the account.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// A (follower, author) subscription pair.
#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub id: i32,
    /// The follower.
    pub user_id: i32,
    /// The followed author.
    pub author_id: i32,
    pub created_at: NaiveDateTime,
}
