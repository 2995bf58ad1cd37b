//! Parameter structures for Ladle operations
//!
//! These are the write payloads sent to the remote API and the shared
//! request parameters used by the CLI. They carry no framework-specific
//! derives beyond serde, so the CLI converts its clap argument structs into
//! them explicitly:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params ──▶ Gateway (GraphQL variables)
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Category, Difficulty, RecipeFilter};

/// Scalar fields of a recipe, as sent by `createRecipe` and `updateRecipe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub title: String,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub category: Category,
    pub difficulty: Difficulty,
}

/// Payload of `addIngredientToRecipe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    pub amount: f64,
    /// May be empty
    #[serde(default)]
    pub unit: String,
}

/// Payload of `addInstructionToRecipe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionInput {
    pub step_number: u32,
    pub description: String,
}

/// Full replacement payload for `updateRecipe`.
///
/// The remote `RecipeInput` type accepts the child collections alongside the
/// scalars on update, so they are flattened into one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecipeInput {
    #[serde(flatten)]
    pub recipe: RecipeInput,
    pub ingredients: Vec<IngredientInput>,
    pub instructions: Vec<InstructionInput>,
}

/// Parameters for listing recipes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRecipes {
    /// Keep only this category
    #[serde(default)]
    pub category: Option<Category>,
    /// Case-insensitive title search
    #[serde(default)]
    pub search: Option<String>,
}

impl From<&ListRecipes> for RecipeFilter {
    fn from(params: &ListRecipes) -> Self {
        RecipeFilter {
            category: params.category,
            search: params.search.clone().unwrap_or_default(),
        }
    }
}
