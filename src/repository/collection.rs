use diesel::prelude::*;

use crate::domain::collection::{CartIngredientRow, CollectionEntry, CollectionKind};
use crate::models::collection::{
    CartEntry as DbCartEntry, Favorite as DbFavorite, NewCartEntry as DbNewCartEntry,
    NewFavorite as DbNewFavorite,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CollectionReader, CollectionWriter, DieselRepository};

impl CollectionReader for DieselRepository {
    fn collection_contains(
        &self,
        kind: CollectionKind,
        user_id: i32,
        recipe_id: i32,
    ) -> RepositoryResult<bool> {
        use crate::schema::{cart_entries, favorites};

        let mut conn = self.conn()?;
        let count = match kind {
            CollectionKind::Favorites => favorites::table
                .filter(favorites::user_id.eq(user_id))
                .filter(favorites::recipe_id.eq(recipe_id))
                .count()
                .get_result::<i64>(&mut conn)?,
            CollectionKind::Cart => cart_entries::table
                .filter(cart_entries::user_id.eq(user_id))
                .filter(cart_entries::recipe_id.eq(recipe_id))
                .count()
                .get_result::<i64>(&mut conn)?,
        };

        Ok(count > 0)
    }

    fn cart_ingredient_rows(&self, user_id: i32) -> RepositoryResult<Vec<CartIngredientRow>> {
        use crate::schema::{cart_entries, ingredients, recipe_ingredients};

        let mut conn = self.conn()?;

        let recipe_ids = cart_entries::table
            .filter(cart_entries::user_id.eq(user_id))
            .select(cart_entries::recipe_id);

        // Stable row order keeps the aggregation's first-occurrence grouping
        // deterministic.
        let rows = recipe_ingredients::table
            .inner_join(ingredients::table)
            .filter(recipe_ingredients::recipe_id.eq_any(recipe_ids))
            .order(recipe_ingredients::id.asc())
            .select((
                ingredients::name,
                ingredients::measurement_unit,
                recipe_ingredients::amount,
            ))
            .load::<(String, String, i32)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(name, measurement_unit, amount)| CartIngredientRow {
                name,
                measurement_unit,
                amount,
            })
            .collect())
    }
}

impl CollectionWriter for DieselRepository {
    fn add_collection_entry(
        &self,
        kind: CollectionKind,
        user_id: i32,
        recipe_id: i32,
    ) -> RepositoryResult<CollectionEntry> {
        use crate::schema::{cart_entries, favorites};

        let mut conn = self.conn()?;
        let entry = match kind {
            CollectionKind::Favorites => diesel::insert_into(favorites::table)
                .values(&DbNewFavorite { user_id, recipe_id })
                .get_result::<DbFavorite>(&mut conn)?
                .into(),
            CollectionKind::Cart => diesel::insert_into(cart_entries::table)
                .values(&DbNewCartEntry { user_id, recipe_id })
                .get_result::<DbCartEntry>(&mut conn)?
                .into(),
        };

        Ok(entry)
    }

    fn remove_collection_entry(
        &self,
        kind: CollectionKind,
        user_id: i32,
        recipe_id: i32,
    ) -> RepositoryResult<()> {
        use crate::schema::{cart_entries, favorites};

        let mut conn = self.conn()?;
        let deleted = match kind {
            CollectionKind::Favorites => diesel::delete(
                favorites::table
                    .filter(favorites::user_id.eq(user_id))
                    .filter(favorites::recipe_id.eq(recipe_id)),
            )
            .execute(&mut conn)?,
            CollectionKind::Cart => diesel::delete(
                cart_entries::table
                    .filter(cart_entries::user_id.eq(user_id))
                    .filter(cart_entries::recipe_id.eq(recipe_id)),
            )
            .execute(&mut conn)?,
        };

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
