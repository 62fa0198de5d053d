use mockall::mock;

use super::{
    CollectionReader, CollectionWriter, IngredientReader, IngredientWriter, RecipeReader,
    RecipeWriter, SubscriptionReader, SubscriptionWriter, TagReader, TagWriter, UserReader,
    UserWriter,
};
use crate::domain::{
    collection::{CartIngredientRow, CollectionEntry, CollectionKind},
    ingredient::{Ingredient, IngredientListQuery, NewIngredient},
    recipe::{NewRecipe, Recipe, RecipeListQuery, UpdateRecipe},
    tag::{NewTag, Tag},
    user::{NewUser, Subscription, User},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn get_user_by_token(&self, token: &str) -> RepositoryResult<Option<User>>;
        fn get_password_hash(&self, email: &str) -> RepositoryResult<Option<(i32, String)>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn create_token(&self, user_id: i32, token: &str) -> RepositoryResult<()>;
        fn delete_token(&self, token: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub SubscriptionRepository {}

    impl SubscriptionReader for SubscriptionRepository {
        fn is_subscribed(&self, user_id: i32, author_id: i32) -> RepositoryResult<bool>;
        fn list_subscribed_authors(&self, user_id: i32) -> RepositoryResult<Vec<User>>;
    }

    impl SubscriptionWriter for SubscriptionRepository {
        fn create_subscription(&self, user_id: i32, author_id: i32) -> RepositoryResult<Subscription>;
        fn delete_subscription(&self, user_id: i32, author_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
        fn get_tags_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Tag>>;
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    }
}

mock! {
    pub IngredientReader {}

    impl IngredientReader for IngredientReader {
        fn get_ingredient_by_id(&self, id: i32) -> RepositoryResult<Option<Ingredient>>;
        fn get_ingredients_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Ingredient>>;
        fn list_ingredients(&self, query: IngredientListQuery) -> RepositoryResult<(usize, Vec<Ingredient>)>;
    }
}

mock! {
    pub IngredientWriter {}

    impl IngredientWriter for IngredientWriter {
        fn create_ingredients(&self, new_ingredients: &[NewIngredient]) -> RepositoryResult<usize>;
    }
}

mock! {
    pub RecipeRepository {}

    impl RecipeReader for RecipeRepository {
        fn get_recipe_by_id(&self, id: i32) -> RepositoryResult<Option<Recipe>>;
        fn list_recipes(&self, query: RecipeListQuery) -> RepositoryResult<(usize, Vec<Recipe>)>;
        fn count_recipes_by_author(&self, author_id: i32) -> RepositoryResult<usize>;
    }

    impl RecipeWriter for RecipeRepository {
        fn create_recipe(&self, new_recipe: &NewRecipe) -> RepositoryResult<Recipe>;
        fn update_recipe(&self, recipe_id: i32, updates: &UpdateRecipe) -> RepositoryResult<Recipe>;
        fn delete_recipe(&self, recipe_id: i32) -> RepositoryResult<()>;
    }

    impl IngredientReader for RecipeRepository {
        fn get_ingredient_by_id(&self, id: i32) -> RepositoryResult<Option<Ingredient>>;
        fn get_ingredients_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Ingredient>>;
        fn list_ingredients(&self, query: IngredientListQuery) -> RepositoryResult<(usize, Vec<Ingredient>)>;
    }

    impl TagReader for RecipeRepository {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
        fn get_tags_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Tag>>;
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    }
}

mock! {
    pub CollectionRepository {}

    impl CollectionReader for CollectionRepository {
        fn collection_contains(&self, kind: CollectionKind, user_id: i32, recipe_id: i32) -> RepositoryResult<bool>;
        fn cart_ingredient_rows(&self, user_id: i32) -> RepositoryResult<Vec<CartIngredientRow>>;
    }

    impl CollectionWriter for CollectionRepository {
        fn add_collection_entry(&self, kind: CollectionKind, user_id: i32, recipe_id: i32) -> RepositoryResult<CollectionEntry>;
        fn remove_collection_entry(&self, kind: CollectionKind, user_id: i32, recipe_id: i32) -> RepositoryResult<()>;
    }

    impl RecipeReader for CollectionRepository {
        fn get_recipe_by_id(&self, id: i32) -> RepositoryResult<Option<Recipe>>;
        fn list_recipes(&self, query: RecipeListQuery) -> RepositoryResult<(usize, Vec<Recipe>)>;
        fn count_recipes_by_author(&self, author_id: i32) -> RepositoryResult<usize>;
    }

    impl UserReader for CollectionRepository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn get_user_by_token(&self, token: &str) -> RepositoryResult<Option<User>>;
        fn get_password_hash(&self, email: &str) -> RepositoryResult<Option<(i32, String)>>;
    }

    impl SubscriptionReader for CollectionRepository {
        fn is_subscribed(&self, user_id: i32, author_id: i32) -> RepositoryResult<bool>;
        fn list_subscribed_authors(&self, user_id: i32) -> RepositoryResult<Vec<User>>;
    }
}
