//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use recipeshare::db::{DbPool, establish_connection_pool};
use recipeshare::domain::ingredient::NewIngredient;
use recipeshare::domain::recipe::{IngredientEntry, NewRecipe};
use recipeshare::domain::tag::NewTag;
use recipeshare::domain::user::{NewUser, User};
use recipeshare::repository::{DieselRepository, IngredientWriter, TagWriter, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Inserts a user with a throwaway password hash.
#[allow(dead_code)]
pub fn seed_user(repo: &DieselRepository, username: &str) -> User {
    repo.create_user(&NewUser::new(
        format!("{username}@example.com"),
        username,
        "Test",
        "User",
        "hash",
    ))
    .expect("failed to seed user")
}

/// Inserts the ingredient catalog and one tag, returning their ids as
/// (ingredient ids, tag id).
#[allow(dead_code)]
pub fn seed_catalog(repo: &DieselRepository, ingredients: &[(&str, &str)]) -> (Vec<i32>, i32) {
    let rows: Vec<NewIngredient> = ingredients
        .iter()
        .map(|(name, unit)| NewIngredient::new(*name, *unit))
        .collect();
    repo.create_ingredients(&rows)
        .expect("failed to seed ingredients");

    let tag = repo
        .create_tag(&NewTag::new("Завтрак", "breakfast", "#E26C2D"))
        .expect("failed to seed tag");

    // Catalog ids are assigned sequentially from 1 in a fresh database.
    let ids = (1..=ingredients.len() as i32).collect();
    (ids, tag.id)
}

/// Builds a recipe payload over already-seeded catalog rows.
#[allow(dead_code)]
pub fn recipe_payload(
    author_id: i32,
    name: &str,
    entries: &[(i32, i32)],
    tag_ids: &[i32],
) -> NewRecipe {
    NewRecipe {
        author_id,
        name: name.to_string(),
        text: "Приготовить и подать.".to_string(),
        image: Some(format!("recipes/{name}.png")),
        cooking_time: 30,
        ingredients: entries
            .iter()
            .map(|(ingredient_id, amount)| IngredientEntry {
                ingredient_id: *ingredient_id,
                amount: *amount,
            })
            .collect(),
        tag_ids: tag_ids.to_vec(),
    }
}
