//! Remote data gateway.
//!
//! The gateway is the only boundary to the remote recipe API. Each method is
//! one query or mutation and reports success or failure for that call alone;
//! retries, timeouts and caching live above it in [`crate::client`].
//!
//! - [`GraphqlGateway`]: talks to the real GraphQL endpoint over HTTP
//! - [`MemoryGateway`]: in-process fake with call recording and fault
//!   injection, used by tests and the CLI's offline mode

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Category, Difficulty, Ingredient, Instruction, Recipe, RecipeId, RecipeSummary},
    params::{IngredientInput, InstructionInput, RecipeInput, UpdateRecipeInput},
};

pub mod documents;
pub mod graphql;
pub mod memory;

pub use graphql::GraphqlGateway;
pub use memory::{CallPhase, GatewayEvent, MemoryGateway};

/// The remote operations the client relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListRecipes,
    GetRecipe,
    RecipesByCategory,
    CreateRecipe,
    UpdateRecipe,
    DeleteRecipe,
    AddIngredient,
    AddInstruction,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListRecipes => "list recipes",
            Operation::GetRecipe => "get recipe",
            Operation::RecipesByCategory => "get recipes by category",
            Operation::CreateRecipe => "create recipe",
            Operation::UpdateRecipe => "update recipe",
            Operation::DeleteRecipe => "delete recipe",
            Operation::AddIngredient => "add ingredient",
            Operation::AddInstruction => "add instruction",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Echo of a freshly created recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedRecipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

/// Result of attaching an ingredient: the parent's full ingredient list
/// after the write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredients {
    pub id: RecipeId,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Result of attaching an instruction: the parent's full instruction list
/// after the write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInstructions {
    pub id: RecipeId,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

/// Typed access to the remote recipe API.
#[async_trait]
pub trait RecipeGateway: Send + Sync {
    /// Short description of where calls go, for user-facing messages.
    fn describe(&self) -> String;

    /// All recipes as summaries. `None` when the server returned no
    /// collection at all.
    async fn list_recipes(&self) -> Result<Option<Vec<RecipeSummary>>>;

    /// One recipe with its children, or `None` when it does not exist.
    async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>>;

    async fn recipes_by_category(&self, category: Category) -> Result<Vec<RecipeSummary>>;

    async fn create_recipe(&self, input: &RecipeInput) -> Result<CreatedRecipe>;

    async fn update_recipe(&self, id: &RecipeId, input: &UpdateRecipeInput) -> Result<Recipe>;

    /// Deletes a recipe; the boolean is the server's acknowledgement.
    async fn delete_recipe(&self, id: &RecipeId) -> Result<bool>;

    async fn add_ingredient(
        &self,
        recipe_id: &RecipeId,
        input: &IngredientInput,
    ) -> Result<RecipeIngredients>;

    async fn add_instruction(
        &self,
        recipe_id: &RecipeId,
        input: &InstructionInput,
    ) -> Result<RecipeInstructions>;
}
