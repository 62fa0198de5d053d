use chrono::Utc;

use recipeshare::auth::AuthenticatedUser;
use recipeshare::domain::collection::CollectionKind;
use recipeshare::domain::recipe::{IngredientEntry, UpdateRecipe};
use recipeshare::repository::{CollectionWriter, DieselRepository, RecipeWriter};
use recipeshare::services::ServiceError;
use recipeshare::services::shopping_list::build_shopping_list;

mod common;

fn as_authenticated(user: &recipeshare::domain::user::User) -> AuthenticatedUser {
    AuthenticatedUser::from(user.clone())
}

#[test]
fn test_shopping_list_aggregates_across_recipes() {
    let test_db = common::TestDb::new("test_shopping_list_aggregates.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = common::seed_user(&repo, "cook");
    let (ids, tag_id) =
        common::seed_catalog(&repo, &[("мука", "г"), ("яйцо", "шт."), ("сахар", "г")]);

    let pancakes = repo
        .create_recipe(&common::recipe_payload(
            user.id,
            "Блины",
            &[(ids[0], 200), (ids[1], 2)],
            &[tag_id],
        ))
        .unwrap();
    let cake = repo
        .create_recipe(&common::recipe_payload(
            user.id,
            "Пирог",
            &[(ids[0], 100), (ids[2], 50)],
            &[tag_id],
        ))
        .unwrap();

    repo.add_collection_entry(CollectionKind::Cart, user.id, pancakes.id)
        .unwrap();
    repo.add_collection_entry(CollectionKind::Cart, user.id, cake.id)
        .unwrap();

    let list = build_shopping_list(&repo, &as_authenticated(&user)).unwrap();

    assert_eq!(list.filename, "cook-shopping-list.txt");
    assert!(list.content.starts_with("Ваш список покупок:\n"));
    // Flour appears once with the summed amount.
    assert!(list.content.contains("\u{00B7} Мука (г) \u{2014} 300"));
    assert!(list.content.contains("\u{00B7} Яйцо (шт.) \u{2014} 2"));
    assert!(list.content.contains("\u{00B7} Сахар (г) \u{2014} 50"));
    assert_eq!(list.content.matches("Мука").count(), 1);
}

#[test]
fn test_shopping_list_tracks_recipe_updates() {
    let test_db = common::TestDb::new("test_shopping_list_updates.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = common::seed_user(&repo, "cook");
    let (ids, tag_id) = common::seed_catalog(&repo, &[("мука", "г"), ("сахар", "г")]);

    let recipe = repo
        .create_recipe(&common::recipe_payload(
            user.id,
            "Пирог",
            &[(ids[0], 100)],
            &[tag_id],
        ))
        .unwrap();
    repo.add_collection_entry(CollectionKind::Cart, user.id, recipe.id)
        .unwrap();

    // Swapping the recipe's ingredients must be reflected in the next export.
    repo.update_recipe(
        recipe.id,
        &UpdateRecipe {
            name: recipe.name.clone(),
            text: recipe.text.clone(),
            image: None,
            cooking_time: recipe.cooking_time,
            ingredients: vec![IngredientEntry {
                ingredient_id: ids[1],
                amount: 75,
            }],
            tag_ids: vec![tag_id],
            updated_at: Utc::now().naive_utc(),
        },
    )
    .unwrap();

    let list = build_shopping_list(&repo, &as_authenticated(&user)).unwrap();

    assert!(!list.content.contains("Мука"));
    assert!(list.content.contains("\u{00B7} Сахар (г) \u{2014} 75"));
}

#[test]
fn test_identical_update_keeps_totals_stable() {
    let test_db = common::TestDb::new("test_shopping_list_stable.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = common::seed_user(&repo, "cook");
    let (ids, tag_id) = common::seed_catalog(&repo, &[("мука", "г"), ("яйцо", "шт.")]);

    let recipe = repo
        .create_recipe(&common::recipe_payload(
            user.id,
            "Блины",
            &[(ids[0], 200), (ids[1], 2)],
            &[tag_id],
        ))
        .unwrap();
    repo.add_collection_entry(CollectionKind::Cart, user.id, recipe.id)
        .unwrap();

    let ingredient_lines = |content: &str| -> Vec<String> {
        content
            .lines()
            .filter(|line| line.starts_with('\u{00B7}'))
            .map(str::to_string)
            .collect()
    };

    let before = build_shopping_list(&repo, &as_authenticated(&user)).unwrap();

    // Rewriting the recipe with the same sets must not change the totals.
    repo.update_recipe(
        recipe.id,
        &UpdateRecipe {
            name: recipe.name.clone(),
            text: recipe.text.clone(),
            image: None,
            cooking_time: recipe.cooking_time,
            ingredients: vec![
                IngredientEntry {
                    ingredient_id: ids[0],
                    amount: 200,
                },
                IngredientEntry {
                    ingredient_id: ids[1],
                    amount: 2,
                },
            ],
            tag_ids: vec![tag_id],
            updated_at: Utc::now().naive_utc(),
        },
    )
    .unwrap();

    let after = build_shopping_list(&repo, &as_authenticated(&user)).unwrap();

    assert_eq!(ingredient_lines(&before.content), ingredient_lines(&after.content));
}

#[test]
fn test_empty_cart_yields_no_export() {
    let test_db = common::TestDb::new("test_shopping_list_empty.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = common::seed_user(&repo, "cook");

    let result = build_shopping_list(&repo, &as_authenticated(&user));

    assert!(matches!(result, Err(ServiceError::EmptyCart)));
}
