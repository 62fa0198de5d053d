use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Reference-data tag attached to recipes, e.g. "breakfast".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable unique name.
    pub name: String,
    /// URL-friendly unique identifier.
    pub slug: String,
    /// Hex color used when rendering the tag.
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
    pub color: String,
}

impl NewTag {
    /// Construct a new tag payload with trimmed fields.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            slug: slug.into().trim().to_string(),
            color: color.into().trim().to_string(),
        }
    }
}
