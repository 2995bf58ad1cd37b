//! GraphQL-over-HTTP gateway.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Map, Value};

use super::{
    documents, CreatedRecipe, Operation, RecipeGateway, RecipeIngredients, RecipeInstructions,
};
use crate::{
    error::{LadleError, Result, TransportResultExt},
    models::{Category, Recipe, RecipeId, RecipeSummary},
    params::{IngredientInput, InstructionInput, RecipeInput, UpdateRecipeInput},
};

/// Response envelope shared by every GraphQL operation.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Vec<ServerMessage>,
}

#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

/// Gateway that posts GraphQL documents to a single endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlGateway {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlGateway {
    /// Creates a gateway for `endpoint`. The timeout bounds each HTTP
    /// exchange as a whole.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ladle/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LadleError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Runs one document and returns the decoded root `field`, or `None`
    /// when the server answered with `null` for it.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<Option<T>> {
        debug!("Sending {operation} to {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .transport(operation.as_str())?;

        let status = response.status();
        let body = response.text().await.transport(operation.as_str())?;

        if !status.is_success() {
            // GraphQL servers often still send an error envelope on 4xx/5xx
            if let Ok(envelope) = serde_json::from_str::<Envelope>(&body) {
                if !envelope.errors.is_empty() {
                    return Err(remote_errors(operation, &envelope.errors));
                }
            }
            return Err(LadleError::remote(
                operation.as_str(),
                format!("HTTP {status}"),
            ));
        }

        decode_response(operation, &body, field)
    }

    /// Like [`Self::execute`], but a `null` result is a server error.
    async fn execute_required<T: DeserializeOwned>(
        &self,
        operation: Operation,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T> {
        self.execute(operation, query, variables, field)
            .await?
            .ok_or_else(|| {
                LadleError::remote(operation.as_str(), format!("server returned no {field}"))
            })
    }
}

fn remote_errors(operation: Operation, errors: &[ServerMessage]) -> LadleError {
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    LadleError::remote(operation.as_str(), message)
}

/// Decodes a GraphQL response body and extracts the root `field`.
fn decode_response<T: DeserializeOwned>(
    operation: Operation,
    body: &str,
    field: &str,
) -> Result<Option<T>> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if !envelope.errors.is_empty() {
        return Err(remote_errors(operation, &envelope.errors));
    }

    match envelope.data.and_then(|mut data| data.remove(field)) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}

#[async_trait]
impl RecipeGateway for GraphqlGateway {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    async fn list_recipes(&self) -> Result<Option<Vec<RecipeSummary>>> {
        self.execute(
            Operation::ListRecipes,
            documents::ALL_RECIPES,
            json!({}),
            "allRecipes",
        )
        .await
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        self.execute(
            Operation::GetRecipe,
            documents::RECIPE_BY_ID,
            json!({ "id": id }),
            "recipeById",
        )
        .await
    }

    async fn recipes_by_category(&self, category: Category) -> Result<Vec<RecipeSummary>> {
        let recipes = self
            .execute(
                Operation::RecipesByCategory,
                documents::RECIPES_BY_CATEGORY,
                json!({ "category": category.as_str() }),
                "recipesByCategory",
            )
            .await?;
        Ok(recipes.unwrap_or_default())
    }

    async fn create_recipe(&self, input: &RecipeInput) -> Result<CreatedRecipe> {
        self.execute_required(
            Operation::CreateRecipe,
            documents::CREATE_RECIPE,
            json!({ "input": input }),
            "createRecipe",
        )
        .await
    }

    async fn update_recipe(&self, id: &RecipeId, input: &UpdateRecipeInput) -> Result<Recipe> {
        self.execute_required(
            Operation::UpdateRecipe,
            documents::UPDATE_RECIPE,
            json!({ "id": id, "input": input }),
            "updateRecipe",
        )
        .await
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<bool> {
        let acknowledged: Option<bool> = self
            .execute(
                Operation::DeleteRecipe,
                documents::DELETE_RECIPE,
                json!({ "id": id }),
                "deleteRecipe",
            )
            .await?;
        Ok(acknowledged.unwrap_or(false))
    }

    async fn add_ingredient(
        &self,
        recipe_id: &RecipeId,
        input: &IngredientInput,
    ) -> Result<RecipeIngredients> {
        self.execute_required(
            Operation::AddIngredient,
            documents::ADD_INGREDIENT,
            json!({ "recipeId": recipe_id, "ingredientInput": input }),
            "addIngredientToRecipe",
        )
        .await
    }

    async fn add_instruction(
        &self,
        recipe_id: &RecipeId,
        input: &InstructionInput,
    ) -> Result<RecipeInstructions> {
        self.execute_required(
            Operation::AddInstruction,
            documents::ADD_INSTRUCTION,
            json!({ "recipeId": recipe_id, "instructionInput": input }),
            "addInstructionToRecipe",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_decode_collection() {
        let body = r#"{"data":{"allRecipes":[
            {"id":"1","title":"Pancakes","description":"Fluffy","prepTime":10,"cookTime":15,
             "servings":4,"category":"BREAKFAST","difficulty":"EASY","createdAt":"2024-03-01T08:00:00"}
        ]}}"#;
        let recipes: Option<Vec<RecipeSummary>> =
            decode_response(Operation::ListRecipes, body, "allRecipes").unwrap();
        let recipes = recipes.expect("collection should be present");
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, RecipeId::from("1"));
        assert_eq!(recipes[0].category, Some(Category::Breakfast));
        assert_eq!(recipes[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_decode_null_collection_is_missing() {
        let body = r#"{"data":{"allRecipes":null}}"#;
        let recipes: Option<Vec<RecipeSummary>> =
            decode_response(Operation::ListRecipes, body, "allRecipes").unwrap();
        assert!(recipes.is_none());
    }

    #[test]
    fn test_decode_null_recipe_is_not_found() {
        let body = r#"{"data":{"recipeById":null}}"#;
        let recipe: Option<Recipe> =
            decode_response(Operation::GetRecipe, body, "recipeById").unwrap();
        assert!(recipe.is_none());
    }

    #[test]
    fn test_decode_errors_become_remote_error() {
        let body = r#"{"data":null,"errors":[{"message":"boom"},{"message":"again"}]}"#;
        let err = decode_response::<Recipe>(Operation::GetRecipe, body, "recipeById").unwrap_err();
        match err {
            LadleError::Remote { operation, message } => {
                assert_eq!(operation, "get recipe");
                assert_eq!(message, "boom; again");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_category_summary_without_category_field() {
        let body = r#"{"data":{"recipesByCategory":[
            {"id":"9","title":"Toast","description":"","prepTime":1,"cookTime":2,"difficulty":"EASY"}
        ]}}"#;
        let recipes: Option<Vec<RecipeSummary>> =
            decode_response(Operation::RecipesByCategory, body, "recipesByCategory").unwrap();
        let recipes = recipes.unwrap();
        assert_eq!(recipes[0].category, None);
        assert_eq!(recipes[0].servings, None);
    }

    #[test]
    fn test_decode_ingredient_list_after_attach() {
        let body = r#"{"data":{"addIngredientToRecipe":{"id":"3","ingredients":[
            {"id":"11","name":"Flour","amount":2.5,"unit":"cup"},
            {"id":"12","name":"Salt","amount":1,"unit":null}
        ]}}}"#;
        let attached: Option<RecipeIngredients> =
            decode_response(Operation::AddIngredient, body, "addIngredientToRecipe").unwrap();
        let attached = attached.unwrap();
        assert_eq!(attached.ingredients.len(), 2);
        assert_eq!(attached.ingredients[1].unit, None);
    }

    #[test]
    fn test_malformed_body_is_serialization_error() {
        let err = decode_response::<Recipe>(Operation::GetRecipe, "not json", "recipeById")
            .unwrap_err();
        assert!(matches!(err, LadleError::Serialization { .. }));
    }
}
