use chrono::Utc;

use recipeshare::domain::collection::CollectionKind;
use recipeshare::domain::ingredient::IngredientListQuery;
use recipeshare::domain::recipe::{IngredientEntry, RecipeListQuery, UpdateRecipe};
use recipeshare::repository::errors::RepositoryError;
use recipeshare::repository::{
    CollectionReader, CollectionWriter, DieselRepository, IngredientReader, RecipeReader,
    RecipeWriter, SubscriptionReader, SubscriptionWriter, TagReader, UserReader, UserWriter,
};

mod common;

#[test]
fn test_recipe_repository_crud() {
    let test_db = common::TestDb::new("test_recipe_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let author = common::seed_user(&repo, "author");
    let (ingredient_ids, tag_id) =
        common::seed_catalog(&repo, &[("мука", "г"), ("яйцо", "шт."), ("сахар", "г")]);

    let recipe = repo
        .create_recipe(&common::recipe_payload(
            author.id,
            "Блины",
            &[(ingredient_ids[0], 200), (ingredient_ids[1], 2)],
            &[tag_id],
        ))
        .unwrap();

    assert_eq!(recipe.author_id, author.id);
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].name, "мука");
    assert_eq!(recipe.ingredients[0].amount, 200);
    assert_eq!(recipe.tags.len(), 1);
    assert_eq!(recipe.tags[0].slug, "breakfast");

    // Update replaces both association sets wholesale.
    let updated = repo
        .update_recipe(
            recipe.id,
            &UpdateRecipe {
                name: "Блины на молоке".to_string(),
                text: recipe.text.clone(),
                image: None,
                cooking_time: 25,
                ingredients: vec![IngredientEntry {
                    ingredient_id: ingredient_ids[2],
                    amount: 50,
                }],
                tag_ids: vec![tag_id],
                updated_at: Utc::now().naive_utc(),
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Блины на молоке");
    assert_eq!(updated.cooking_time, 25);
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].name, "сахар");
    // Omitted image keeps the stored path.
    assert_eq!(updated.image, recipe.image);

    assert_eq!(repo.count_recipes_by_author(author.id).unwrap(), 1);

    repo.delete_recipe(recipe.id).unwrap();
    assert!(repo.get_recipe_by_id(recipe.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_recipe(recipe.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_recipe_list_filters() {
    let test_db = common::TestDb::new("test_recipe_list_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let alice = common::seed_user(&repo, "alice");
    let bob = common::seed_user(&repo, "bob");
    let (ingredient_ids, tag_id) = common::seed_catalog(&repo, &[("мука", "г")]);

    let pancakes = repo
        .create_recipe(&common::recipe_payload(
            alice.id,
            "Блины",
            &[(ingredient_ids[0], 200)],
            &[tag_id],
        ))
        .unwrap();
    let bread = repo
        .create_recipe(&common::recipe_payload(
            bob.id,
            "Хлеб",
            &[(ingredient_ids[0], 500)],
            &[tag_id],
        ))
        .unwrap();

    let (total, items) = repo
        .list_recipes(RecipeListQuery::new().author(alice.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, pancakes.id);

    let (total, _) = repo
        .list_recipes(RecipeListQuery::new().tags(vec!["breakfast".to_string()]))
        .unwrap();
    assert_eq!(total, 2);

    let (total, _) = repo
        .list_recipes(RecipeListQuery::new().tags(vec!["dinner".to_string()]))
        .unwrap();
    assert_eq!(total, 0);

    repo.add_collection_entry(CollectionKind::Favorites, alice.id, bread.id)
        .unwrap();
    let (total, items) = repo
        .list_recipes(RecipeListQuery::new().favorited_by(alice.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, bread.id);

    let (total, items) = repo
        .list_recipes(RecipeListQuery::new().paginate(1, 1))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 1);
}

#[test]
fn test_collection_uniqueness_and_cart_rows() {
    let test_db = common::TestDb::new("test_collection_uniqueness.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = common::seed_user(&repo, "cook");
    let (ingredient_ids, tag_id) =
        common::seed_catalog(&repo, &[("мука", "г"), ("яйцо", "шт."), ("сахар", "г")]);

    let pancakes = repo
        .create_recipe(&common::recipe_payload(
            user.id,
            "Блины",
            &[(ingredient_ids[0], 200), (ingredient_ids[1], 2)],
            &[tag_id],
        ))
        .unwrap();
    let cake = repo
        .create_recipe(&common::recipe_payload(
            user.id,
            "Пирог",
            &[(ingredient_ids[0], 100), (ingredient_ids[2], 50)],
            &[tag_id],
        ))
        .unwrap();

    repo.add_collection_entry(CollectionKind::Cart, user.id, pancakes.id)
        .unwrap();
    assert!(matches!(
        repo.add_collection_entry(CollectionKind::Cart, user.id, pancakes.id),
        Err(RepositoryError::Conflict)
    ));

    // The same pair is free in the other collection.
    repo.add_collection_entry(CollectionKind::Favorites, user.id, pancakes.id)
        .unwrap();
    assert!(
        repo.collection_contains(CollectionKind::Favorites, user.id, pancakes.id)
            .unwrap()
    );

    repo.add_collection_entry(CollectionKind::Cart, user.id, cake.id)
        .unwrap();

    let rows = repo.cart_ingredient_rows(user.id).unwrap();
    assert_eq!(rows.len(), 4);
    // Rows come back in recipe-ingredient insertion order.
    assert_eq!(rows[0].name, "мука");
    assert_eq!(rows[0].amount, 200);
    assert_eq!(rows[2].name, "мука");
    assert_eq!(rows[2].amount, 100);

    repo.remove_collection_entry(CollectionKind::Cart, user.id, pancakes.id)
        .unwrap();
    assert!(matches!(
        repo.remove_collection_entry(CollectionKind::Cart, user.id, pancakes.id),
        Err(RepositoryError::NotFound)
    ));

    // Deleting a recipe cascades into the collections.
    repo.delete_recipe(cake.id).unwrap();
    assert!(repo.cart_ingredient_rows(user.id).unwrap().is_empty());
}

#[test]
fn test_subscription_repository() {
    let test_db = common::TestDb::new("test_subscription_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let follower = common::seed_user(&repo, "follower");
    let author = common::seed_user(&repo, "writer");

    assert!(!repo.is_subscribed(follower.id, author.id).unwrap());

    repo.create_subscription(follower.id, author.id).unwrap();
    assert!(repo.is_subscribed(follower.id, author.id).unwrap());
    // Following is directional.
    assert!(!repo.is_subscribed(author.id, follower.id).unwrap());

    assert!(matches!(
        repo.create_subscription(follower.id, author.id),
        Err(RepositoryError::Conflict)
    ));

    let authors = repo.list_subscribed_authors(follower.id).unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].username, "writer");

    repo.delete_subscription(follower.id, author.id).unwrap();
    assert!(matches!(
        repo.delete_subscription(follower.id, author.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_user_and_token_repository() {
    let test_db = common::TestDb::new("test_user_token_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = common::seed_user(&repo, "cook");

    assert!(matches!(
        repo.create_user(&recipeshare::domain::user::NewUser::new(
            "cook@example.com",
            "othername",
            "Test",
            "User",
            "hash",
        )),
        Err(RepositoryError::Conflict)
    ));

    let by_email = repo
        .get_user_by_email("cook@example.com")
        .unwrap()
        .expect("expected lookup by email");
    assert_eq!(by_email.id, user.id);
    assert!(repo.get_user_by_email("nobody@example.com").unwrap().is_none());

    let (id, hash) = repo
        .get_password_hash("cook@example.com")
        .unwrap()
        .expect("expected stored credentials");
    assert_eq!(id, user.id);
    assert_eq!(hash, "hash");

    repo.create_token(user.id, "tok-123").unwrap();
    let resolved = repo
        .get_user_by_token("tok-123")
        .unwrap()
        .expect("expected token to resolve");
    assert_eq!(resolved.id, user.id);

    repo.delete_token("tok-123").unwrap();
    assert!(repo.get_user_by_token("tok-123").unwrap().is_none());
}

#[test]
fn test_ingredient_catalog_search() {
    let test_db = common::TestDb::new("test_ingredient_catalog_search.db");
    let repo = DieselRepository::new(test_db.pool());

    common::seed_catalog(&repo, &[("мука", "г"), ("мука ржаная", "г"), ("яйцо", "шт.")]);

    let (total, items) = repo
        .list_ingredients(IngredientListQuery::new().search("мука"))
        .unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|item| item.name.starts_with("мука")));

    let (total, _) = repo
        .list_ingredients(IngredientListQuery::new())
        .unwrap();
    assert_eq!(total, 3);

    let tags = repo.list_tags().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].slug, "breakfast");
}
