use diesel::prelude::*;

use crate::domain::ingredient::{
    Ingredient as DomainIngredient, IngredientListQuery, NewIngredient as DomainNewIngredient,
};
use crate::models::ingredient::{Ingredient as DbIngredient, NewIngredient as DbNewIngredient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, IngredientReader, IngredientWriter};

impl IngredientReader for DieselRepository {
    fn get_ingredient_by_id(&self, id: i32) -> RepositoryResult<Option<DomainIngredient>> {
        use crate::schema::ingredients;

        let mut conn = self.conn()?;
        let ingredient = ingredients::table
            .filter(ingredients::id.eq(id))
            .first::<DbIngredient>(&mut conn)
            .optional()?;

        Ok(ingredient.map(DomainIngredient::from))
    }

    fn get_ingredients_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<DomainIngredient>> {
        use crate::schema::ingredients;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let rows = ingredients::table
            .filter(ingredients::id.eq_any(ids))
            .load::<DbIngredient>(&mut conn)?;

        Ok(rows.into_iter().map(DomainIngredient::from).collect())
    }

    fn list_ingredients(
        &self,
        query: IngredientListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainIngredient>)> {
        use crate::schema::ingredients;

        let mut conn = self.conn()?;

        let mut count_query = ingredients::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            count_query = count_query.filter(ingredients::name.like(pattern));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = ingredients::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items = items.filter(ingredients::name.like(pattern));
        }

        items = items.order(ingredients::name.asc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbIngredient>(&mut conn)?;

        Ok((total, rows.into_iter().map(DomainIngredient::from).collect()))
    }
}

impl IngredientWriter for DieselRepository {
    fn create_ingredients(
        &self,
        new_ingredients: &[DomainNewIngredient],
    ) -> RepositoryResult<usize> {
        use crate::schema::ingredients;

        let mut conn = self.conn()?;
        let payload: Vec<DbNewIngredient> =
            new_ingredients.iter().map(DbNewIngredient::from).collect();

        // Rows colliding with an existing (name, unit) pair are skipped.
        let inserted = diesel::insert_or_ignore_into(ingredients::table)
            .values(&payload)
            .execute(&mut conn)?;

        Ok(inserted)
    }
}
