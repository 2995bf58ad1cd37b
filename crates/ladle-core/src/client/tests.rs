//! Tests for the client module.

use std::{sync::Arc, time::Duration};

use super::*;
use crate::gateway::MemoryGateway;

/// Helper function to create a client over a seeded in-memory gateway
fn create_test_client() -> (Arc<MemoryGateway>, Client) {
    let gateway = Arc::new(MemoryGateway::seeded());
    let client = ClientBuilder::new()
        .with_gateway(gateway.clone())
        .with_timeout(Duration::from_millis(200))
        .build()
        .expect("Failed to create client");
    (gateway, client)
}

#[tokio::test]
async fn test_list_recipes_is_cached() {
    let (gateway, client) = create_test_client();

    let first = client.list_recipes().await.unwrap().unwrap();
    let second = client.list_recipes().await.unwrap().unwrap();

    assert_eq!(first.len(), 3);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(gateway.issued(Operation::ListRecipes), 1);
}

#[tokio::test]
async fn test_refresh_replaces_snapshot_wholesale() {
    let (gateway, client) = create_test_client();

    let before = client.list_recipes().await.unwrap().unwrap();
    let after = client.refresh_recipes().await.unwrap().unwrap();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.len(), 3);
    assert_eq!(gateway.issued(Operation::ListRecipes), 2);
}

#[tokio::test]
async fn test_missing_collection_is_not_cached() {
    let (gateway, client) = create_test_client();
    gateway.set_missing_collection(true);

    assert!(client.list_recipes().await.unwrap().is_none());
    assert!(!client.has_cached_collection());
}

#[tokio::test]
async fn test_delete_invalidates_collection() {
    let (_gateway, client) = create_test_client();
    client.list_recipes().await.unwrap();

    let acknowledged = client.delete_recipe(&RecipeId::from("1")).await.unwrap();
    assert!(acknowledged);
    assert!(!client.has_cached_collection());

    let recipes = client.list_recipes().await.unwrap().unwrap();
    assert!(recipes.iter().all(|r| r.id != RecipeId::from("1")));
}

#[tokio::test]
async fn test_unacknowledged_delete_keeps_cache() {
    let (_gateway, client) = create_test_client();
    client.list_recipes().await.unwrap();

    let acknowledged = client.delete_recipe(&RecipeId::from("404")).await.unwrap();
    assert!(!acknowledged);
    assert!(client.has_cached_collection());
}

#[tokio::test]
async fn test_hung_call_times_out() {
    let (gateway, client) = create_test_client();
    gateway.hang(Operation::GetRecipe, None);

    let err = client.get_recipe(&RecipeId::from("1")).await.unwrap_err();
    match err {
        LadleError::Timeout { operation, after } => {
            assert_eq!(operation, "get recipe");
            assert_eq!(after, Duration::from_millis(200));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_require_recipe_not_found() {
    let (_gateway, client) = create_test_client();
    let err = client.require_recipe(&RecipeId::from("99")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_recipe_replaces_children() {
    let (gateway, client) = create_test_client();
    let id = RecipeId::from("3");

    let updated = client
        .update_recipe(
            &id,
            &UpdateRecipeInput {
                recipe: RecipeInput {
                    title: "Pasta al pomodoro".to_string(),
                    description: "Better pasta.".to_string(),
                    prep_time: 5,
                    cook_time: 12,
                    servings: 2,
                    category: Category::Dinner,
                    difficulty: crate::models::Difficulty::Medium,
                },
                ingredients: vec![IngredientInput {
                    name: "Rigatoni".to_string(),
                    amount: 250.0,
                    unit: "g".to_string(),
                }],
                instructions: vec![InstructionInput {
                    step_number: 1,
                    description: "Cook everything.".to_string(),
                }],
            },
        )
        .await
        .expect("Failed to update recipe");

    assert_eq!(updated.title, "Pasta al pomodoro");
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(gateway.recipe(&id).unwrap().instructions.len(), 1);
}

#[tokio::test]
async fn test_builder_rejects_zero_timeout() {
    let result = ClientBuilder::new()
        .with_gateway(Arc::new(MemoryGateway::new()))
        .with_timeout(Duration::ZERO)
        .build();
    assert!(matches!(result, Err(LadleError::InvalidInput { .. })));
}
