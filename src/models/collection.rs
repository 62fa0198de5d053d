use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::collection::CollectionEntry as DomainCollectionEntry;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct NewFavorite {
    pub user_id: i32,
    pub recipe_id: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::cart_entries)]
pub struct CartEntry {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_entries)]
pub struct NewCartEntry {
    pub user_id: i32,
    pub recipe_id: i32,
}

impl From<Favorite> for DomainCollectionEntry {
    fn from(value: Favorite) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            recipe_id: value.recipe_id,
            created_at: value.created_at,
        }
    }
}

impl From<CartEntry> for DomainCollectionEntry {
    fn from(value: CartEntry) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            recipe_id: value.recipe_id,
            created_at: value.created_at,
        }
    }
}
