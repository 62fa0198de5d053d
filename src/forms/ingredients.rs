use std::io;

use csv::Trim;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::ingredient::NewIngredient;

/// Result type returned by the ingredient upload helpers.
pub type UploadIngredientsResult<T> = Result<T, UploadIngredientsError>;

/// Errors that can occur while parsing an uploaded ingredient catalog.
#[derive(Debug, Error)]
pub enum UploadIngredientsError {
    /// The CSV payload could not be parsed.
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    /// A row is missing the name or the measurement unit.
    #[error("row {0}: name and measurement unit are required")]
    IncompleteRow(usize),
    /// The file contains no usable rows.
    #[error("the file contains no ingredients")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    name: String,
    measurement_unit: String,
}

/// Parse a headerless `name,measurement_unit` CSV into catalog payloads.
pub fn parse_ingredients_csv<R: io::Read>(
    reader: R,
) -> UploadIngredientsResult<Vec<NewIngredient>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut ingredients = Vec::new();
    for (row, record) in csv_reader.deserialize::<IngredientRecord>().enumerate() {
        let record = record?;
        if record.name.is_empty() || record.measurement_unit.is_empty() {
            return Err(UploadIngredientsError::IncompleteRow(row + 1));
        }
        ingredients.push(NewIngredient::new(record.name, record.measurement_unit));
    }

    if ingredients.is_empty() {
        return Err(UploadIngredientsError::Empty);
    }

    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headerless_rows() {
        let data = "мука,г\nяйцо,шт.\n";

        let ingredients = parse_ingredients_csv(data.as_bytes()).expect("expected parse");

        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0], NewIngredient::new("мука", "г"));
        assert_eq!(ingredients[1].measurement_unit, "шт.");
    }

    #[test]
    fn rejects_rows_without_unit() {
        let data = "мука,г\nяйцо,\n";

        let result = parse_ingredients_csv(data.as_bytes());

        assert!(matches!(result, Err(UploadIngredientsError::IncompleteRow(2))));
    }

    #[test]
    fn rejects_empty_file() {
        let result = parse_ingredients_csv("".as_bytes());

        assert!(matches!(result, Err(UploadIngredientsError::Empty)));
    }
}
