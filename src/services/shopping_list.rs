use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::auth::AuthenticatedUser;
use crate::domain::collection::CartIngredientRow;
use crate::repository::CollectionReader;
use crate::services::{ServiceError, ServiceResult};

/// Footer template; the separator line is one dash per character of it.
const FOOTER_FORMAT: &str = "Список создан в %H:%M от %d/%m/%Y";

/// Rendered shopping list ready to be served as a text attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingList {
    /// Suggested download filename.
    pub filename: String,
    /// Plain-text body.
    pub content: String,
}

/// One aggregated ingredient total across every recipe in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientTotal {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

/// Builds the shopping-list export for the user's cart.
///
/// Fails with [`ServiceError::EmptyCart`] when the cart holds no recipes;
/// every recipe carries at least one ingredient, so an empty row set means an
/// empty cart.
pub fn build_shopping_list<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<ShoppingList>
where
    R: CollectionReader + ?Sized,
{
    let rows = repo.cart_ingredient_rows(user.id).map_err(ServiceError::from)?;
    if rows.is_empty() {
        return Err(ServiceError::EmptyCart);
    }

    let totals = aggregate_totals(rows);
    let content = render_shopping_list(&totals, chrono::Local::now().naive_local());

    Ok(ShoppingList {
        filename: format!("{}-shopping-list.txt", user.username),
        content,
    })
}

/// Sums amounts grouped by (name, measurement unit). Keys are compared
/// case-sensitively as stored; groups keep the order of their first
/// occurrence in the cart.
pub fn aggregate_totals(rows: Vec<CartIngredientRow>) -> Vec<IngredientTotal> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut totals: Vec<IngredientTotal> = Vec::new();

    for row in rows {
        let key = (row.name.clone(), row.measurement_unit.clone());
        match index.get(&key) {
            Some(&position) => totals[position].amount += i64::from(row.amount),
            None => {
                index.insert(key, totals.len());
                totals.push(IngredientTotal {
                    name: row.name,
                    measurement_unit: row.measurement_unit,
                    amount: i64::from(row.amount),
                });
            }
        }
    }

    totals
}

/// Renders the aggregated totals into the export format.
pub fn render_shopping_list(totals: &[IngredientTotal], now: NaiveDateTime) -> String {
    let mut out = String::from("Ваш список покупок:\n");

    for total in totals {
        let _ = writeln!(
            out,
            "\u{00B7} {} ({}) \u{2014} {}",
            capitalize(&total.name),
            total.measurement_unit,
            total.amount
        );
    }

    out.push_str(&"-".repeat(FOOTER_FORMAT.chars().count()));
    out.push('\n');
    out.push_str(&now.format(FOOTER_FORMAT).to_string());

    out
}

/// First letter uppercased, the rest lowercased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
