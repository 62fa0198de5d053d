use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::recipe::IngredientEntry;

/// Maximum allowed length for a recipe name.
const NAME_MAX_LEN: u64 = 200;

/// Result type returned by the recipe form helpers.
pub type RecipeFormResult<T> = Result<T, RecipeFormError>;

/// Errors that can occur while processing recipe payloads.
#[derive(Debug, Error)]
pub enum RecipeFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The image payload is not a decodable `data:image/...;base64,` URL.
    #[error("image must be a base64-encoded data URL")]
    InvalidImage,
}

/// JSON payload submitted when creating or updating a recipe.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecipeForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1))]
    pub text: String,
    /// Base64 data URL; optional on update to keep the stored photo.
    pub image: Option<String>,
    pub cooking_time: i32,
    pub ingredients: Vec<IngredientEntryForm>,
    pub tags: Vec<i32>,
}

/// One ingredient reference of a recipe payload.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IngredientEntryForm {
    pub id: i32,
    pub amount: i32,
}

impl RecipeForm {
    /// Shape validation; cross-field rules live in the recipe service.
    pub fn validate_shape(&self) -> RecipeFormResult<()> {
        self.validate()?;
        Ok(())
    }

    /// The submitted ingredient entries as domain values, in payload order.
    pub fn ingredient_entries(&self) -> Vec<IngredientEntry> {
        self.ingredients
            .iter()
            .map(|entry| IngredientEntry {
                ingredient_id: entry.id,
                amount: entry.amount,
            })
            .collect()
    }
}

/// Decoded recipe photo extracted from a base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Image {
    pub bytes: Vec<u8>,
    /// File extension taken from the MIME subtype, e.g. "png".
    pub extension: String,
}

impl Base64Image {
    /// Parse a `data:image/<ext>;base64,<payload>` URL.
    pub fn parse(data_url: &str) -> RecipeFormResult<Self> {
        let rest = data_url
            .strip_prefix("data:image/")
            .ok_or(RecipeFormError::InvalidImage)?;
        let (extension, payload) = rest
            .split_once(";base64,")
            .ok_or(RecipeFormError::InvalidImage)?;

        if extension.is_empty() || !extension.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(RecipeFormError::InvalidImage);
        }

        let bytes = BASE64
            .decode(payload)
            .map_err(|_| RecipeFormError::InvalidImage)?;

        Ok(Self {
            bytes,
            extension: extension.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> RecipeForm {
        RecipeForm {
            name: "Блины".to_string(),
            text: "Смешать и жарить.".to_string(),
            image: None,
            cooking_time: 20,
            ingredients: vec![IngredientEntryForm { id: 1, amount: 200 }],
            tags: vec![1],
        }
    }

    #[test]
    fn valid_form_passes_shape_validation() {
        assert!(base_form().validate_shape().is_ok());
    }

    #[test]
    fn empty_name_fails_shape_validation() {
        let mut form = base_form();
        form.name = String::new();

        assert!(matches!(
            form.validate_shape(),
            Err(RecipeFormError::Validation(_))
        ));
    }

    #[test]
    fn ingredient_entries_preserve_payload_order() {
        let mut form = base_form();
        form.ingredients = vec![
            IngredientEntryForm { id: 3, amount: 1 },
            IngredientEntryForm { id: 1, amount: 2 },
        ];

        let entries = form.ingredient_entries();
        assert_eq!(entries[0].ingredient_id, 3);
        assert_eq!(entries[1].ingredient_id, 1);
    }

    #[test]
    fn base64_image_parses_data_url() {
        // "hi" in base64.
        let image = Base64Image::parse("data:image/png;base64,aGk=").expect("expected image");

        assert_eq!(image.extension, "png");
        assert_eq!(image.bytes, b"hi");
    }

    #[test]
    fn base64_image_rejects_plain_strings() {
        assert!(matches!(
            Base64Image::parse("not-an-image"),
            Err(RecipeFormError::InvalidImage)
        ));
        assert!(matches!(
            Base64Image::parse("data:image/png;base64,###"),
            Err(RecipeFormError::InvalidImage)
        ));
    }
}
