use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::recipe::{
    NewRecipe as DomainNewRecipe, Recipe as DomainRecipe, RecipeListQuery,
    UpdateRecipe as DomainUpdateRecipe,
};
use crate::models::ingredient::Ingredient as DbIngredient;
use crate::models::recipe::{
    NewRecipe as DbNewRecipe, NewRecipeIngredient as DbNewRecipeIngredient,
    NewRecipeTag as DbNewRecipeTag, Recipe as DbRecipe, RecipeIngredient as DbRecipeIngredient,
    UpdateRecipe as DbUpdateRecipe,
};
use crate::models::tag::Tag as DbTag;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, RecipeReader, RecipeWriter};

impl RecipeReader for DieselRepository {
    fn get_recipe_by_id(&self, id: i32) -> RepositoryResult<Option<DomainRecipe>> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;
        let recipe = recipes::table
            .filter(recipes::id.eq(id))
            .first::<DbRecipe>(&mut conn)
            .optional()?;

        let Some(recipe) = recipe else {
            return Ok(None);
        };

        let mut associations = load_associations_for_recipes(&mut conn, &[recipe.id])?;
        let (ingredients, tags) = associations.remove(&recipe.id).unwrap_or_default();

        Ok(Some(recipe.into_domain(ingredients, tags)))
    }

    fn list_recipes(&self, query: RecipeListQuery) -> RepositoryResult<(usize, Vec<DomainRecipe>)> {
        use crate::schema::{cart_entries, favorites, recipe_tags, recipes, tags};

        let mut conn = self.conn()?;

        let RecipeListQuery {
            author_id,
            tag_slugs,
            favorited_by,
            in_cart_of,
            pagination,
        } = query;

        let build_filtered = || {
            let mut filtered = recipes::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(author) = author_id {
                filtered = filtered.filter(recipes::author_id.eq(author));
            }

            if !tag_slugs.is_empty() {
                let tagged = recipe_tags::table
                    .inner_join(tags::table)
                    .filter(tags::slug.eq_any(tag_slugs.clone()))
                    .select(recipe_tags::recipe_id);
                filtered = filtered.filter(recipes::id.eq_any(tagged));
            }

            if let Some(user) = favorited_by {
                let favorited = favorites::table
                    .filter(favorites::user_id.eq(user))
                    .select(favorites::recipe_id);
                filtered = filtered.filter(recipes::id.eq_any(favorited));
            }

            if let Some(user) = in_cart_of {
                let in_cart = cart_entries::table
                    .filter(cart_entries::user_id.eq(user))
                    .select(cart_entries::recipe_id);
                filtered = filtered.filter(recipes::id.eq_any(in_cart));
            }

            filtered
        };

        let total = build_filtered().count().get_result::<i64>(&mut conn)? as usize;

        // Newest first, matching the public feed ordering.
        let mut items = build_filtered().order(recipes::created_at.desc());

        if let Some(pagination) = &pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_recipes = items.load::<DbRecipe>(&mut conn)?;
        if db_recipes.is_empty() {
            return Ok((total, Vec::new()));
        }

        let recipe_ids: Vec<i32> = db_recipes.iter().map(|recipe| recipe.id).collect();
        let mut associations = load_associations_for_recipes(&mut conn, &recipe_ids)?;

        let recipes = db_recipes
            .into_iter()
            .map(|recipe| {
                let (ingredients, tags) = associations.remove(&recipe.id).unwrap_or_default();
                recipe.into_domain(ingredients, tags)
            })
            .collect();

        Ok((total, recipes))
    }

    fn count_recipes_by_author(&self, author_id: i32) -> RepositoryResult<usize> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;
        let count = recipes::table
            .filter(recipes::author_id.eq(author_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count as usize)
    }
}

impl RecipeWriter for DieselRepository {
    fn create_recipe(&self, new_recipe: &DomainNewRecipe) -> RepositoryResult<DomainRecipe> {
        use crate::schema::{recipe_ingredients, recipe_tags, recipes};

        let mut conn = self.conn()?;

        conn.transaction::<DomainRecipe, RepositoryError, _>(|conn| {
            let db_new = DbNewRecipe::from(new_recipe);

            let created = diesel::insert_into(recipes::table)
                .values(&db_new)
                .get_result::<DbRecipe>(conn)?;

            let recipe_id = created.id;

            let tag_rows: Vec<DbNewRecipeTag> = new_recipe
                .tag_ids
                .iter()
                .map(|tag_id| DbNewRecipeTag {
                    recipe_id,
                    tag_id: *tag_id,
                })
                .collect();

            diesel::insert_into(recipe_tags::table)
                .values(&tag_rows)
                .execute(conn)?;

            let ingredient_rows: Vec<DbNewRecipeIngredient> = new_recipe
                .ingredients
                .iter()
                .map(|entry| DbNewRecipeIngredient {
                    recipe_id,
                    ingredient_id: entry.ingredient_id,
                    amount: entry.amount,
                })
                .collect();

            diesel::insert_into(recipe_ingredients::table)
                .values(&ingredient_rows)
                .execute(conn)?;

            let mut associations = load_associations_for_recipes(conn, &[recipe_id])?;
            let (ingredients, tags) = associations.remove(&recipe_id).unwrap_or_default();

            Ok(created.into_domain(ingredients, tags))
        })
    }

    fn update_recipe(
        &self,
        recipe_id: i32,
        updates: &DomainUpdateRecipe,
    ) -> RepositoryResult<DomainRecipe> {
        use crate::schema::{recipe_ingredients, recipe_tags, recipes};

        let mut conn = self.conn()?;

        conn.transaction::<DomainRecipe, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateRecipe::from(updates);

            let updated = diesel::update(recipes::table.filter(recipes::id.eq(recipe_id)))
                .set(&db_updates)
                .get_result::<DbRecipe>(conn)?;

            // The association sets are replaced wholesale, never merged.
            diesel::delete(recipe_tags::table.filter(recipe_tags::recipe_id.eq(recipe_id)))
                .execute(conn)?;

            let tag_rows: Vec<DbNewRecipeTag> = updates
                .tag_ids
                .iter()
                .map(|tag_id| DbNewRecipeTag {
                    recipe_id,
                    tag_id: *tag_id,
                })
                .collect();

            diesel::insert_into(recipe_tags::table)
                .values(&tag_rows)
                .execute(conn)?;

            diesel::delete(
                recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(recipe_id)),
            )
            .execute(conn)?;

            let ingredient_rows: Vec<DbNewRecipeIngredient> = updates
                .ingredients
                .iter()
                .map(|entry| DbNewRecipeIngredient {
                    recipe_id,
                    ingredient_id: entry.ingredient_id,
                    amount: entry.amount,
                })
                .collect();

            diesel::insert_into(recipe_ingredients::table)
                .values(&ingredient_rows)
                .execute(conn)?;

            let mut associations = load_associations_for_recipes(conn, &[recipe_id])?;
            let (ingredients, tags) = associations.remove(&recipe_id).unwrap_or_default();

            Ok(updated.into_domain(ingredients, tags))
        })
    }

    fn delete_recipe(&self, recipe_id: i32) -> RepositoryResult<()> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;

        // Association rows cascade via the schema's FK constraints.
        let deleted = diesel::delete(recipes::table.filter(recipes::id.eq(recipe_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

type RecipeAssociations = (Vec<(DbRecipeIngredient, DbIngredient)>, Vec<DbTag>);

fn load_associations_for_recipes(
    conn: &mut SqliteConnection,
    recipe_ids: &[i32],
) -> RepositoryResult<HashMap<i32, RecipeAssociations>> {
    use crate::schema::{ingredients, recipe_ingredients, recipe_tags, tags};

    if recipe_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let ingredient_rows = recipe_ingredients::table
        .inner_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq_any(recipe_ids))
        .order(recipe_ingredients::id.asc())
        .load::<(DbRecipeIngredient, DbIngredient)>(conn)?;

    let tag_rows = recipe_tags::table
        .inner_join(tags::table)
        .filter(recipe_tags::recipe_id.eq_any(recipe_ids))
        .order(recipe_tags::id.asc())
        .load::<(crate::models::recipe::RecipeTagRow, DbTag)>(conn)?;

    let mut map: HashMap<i32, RecipeAssociations> = HashMap::new();
    for (row, ingredient) in ingredient_rows {
        map.entry(row.recipe_id).or_default().0.push((row, ingredient));
    }
    for (row, tag) in tag_rows {
        map.entry(row.recipe_id).or_default().1.push(tag);
    }

    Ok(map)
}
