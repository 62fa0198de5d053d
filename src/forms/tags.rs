use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::NewTag;

/// Maximum allowed length for tag names and slugs.
const NAME_MAX_LEN: u64 = 200;

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag forms.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The color is not a `#RRGGBB` hex value.
    #[error("color must be a #RRGGBB hex value")]
    InvalidColor,
    /// The slug contains characters outside `[a-z0-9-_]`.
    #[error("slug may only contain lowercase letters, digits, hyphens and underscores")]
    InvalidSlug,
}

/// JSON payload submitted when creating a tag.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddTagForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub slug: String,
    pub color: String,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        let slug = self.slug.trim();
        if !slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '-' | '_'))
        {
            return Err(TagFormError::InvalidSlug);
        }

        let color = self.color.trim();
        let is_hex_color = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|ch| ch.is_ascii_hexdigit());
        if !is_hex_color {
            return Err(TagFormError::InvalidColor);
        }

        Ok(NewTag::new(self.name.trim(), slug, color))
    }
}
