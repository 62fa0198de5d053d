use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::recipe::{
    NewRecipe as DomainNewRecipe, Recipe as DomainRecipe, RecipeIngredient as DomainRecipeIngredient,
    UpdateRecipe as DomainUpdateRecipe,
};
use crate::domain::tag::Tag as DomainTag;
use crate::models::ingredient::Ingredient as DbIngredient;
use crate::models::tag::Tag as DbTag;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct Recipe {
    pub id: i32,
    pub author_id: i32,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(belongs_to(Recipe, foreign_key = recipe_id))]
pub struct RecipeIngredient {
    pub id: i32,
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::recipe_tags)]
#[diesel(belongs_to(Recipe, foreign_key = recipe_id))]
pub struct RecipeTagRow {
    pub id: i32,
    pub recipe_id: i32,
    pub tag_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub author_id: i32,
    pub name: &'a str,
    pub text: &'a str,
    pub image: Option<&'a str>,
    pub cooking_time: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredient {
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub amount: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_tags)]
pub struct NewRecipeTag {
    pub recipe_id: i32,
    pub tag_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct UpdateRecipe<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub image: Option<Option<&'a str>>,
    pub cooking_time: i32,
    pub updated_at: NaiveDateTime,
}

impl Recipe {
    /// Assemble the domain recipe from its row plus association rows joined
    /// to their catalog records.
    pub fn into_domain(
        self,
        ingredients: Vec<(RecipeIngredient, DbIngredient)>,
        tags: Vec<DbTag>,
    ) -> DomainRecipe {
        DomainRecipe {
            id: self.id,
            author_id: self.author_id,
            name: self.name,
            text: self.text,
            image: self.image,
            cooking_time: self.cooking_time,
            ingredients: ingredients
                .into_iter()
                .map(|(row, ingredient)| DomainRecipeIngredient {
                    ingredient_id: ingredient.id,
                    name: ingredient.name,
                    measurement_unit: ingredient.measurement_unit,
                    amount: row.amount,
                })
                .collect(),
            tags: tags.into_iter().map(DomainTag::from).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRecipe> for NewRecipe<'a> {
    fn from(value: &'a DomainNewRecipe) -> Self {
        Self {
            author_id: value.author_id,
            name: value.name.as_str(),
            text: value.text.as_str(),
            image: value.image.as_deref(),
            cooking_time: value.cooking_time,
        }
    }
}

impl<'a> From<&'a DomainUpdateRecipe> for UpdateRecipe<'a> {
    fn from(value: &'a DomainUpdateRecipe) -> Self {
        Self {
            name: value.name.as_str(),
            text: value.text.as_str(),
            image: value.image.as_ref().map(|image| image.as_deref()),
            cooking_time: value.cooking_time,
            updated_at: value.updated_at,
        }
    }
}
