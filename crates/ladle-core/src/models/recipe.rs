//! Persisted recipe models as reported by the server.

use serde::{Deserialize, Serialize};

use super::{Category, Difficulty, RecipeId};

/// A complete recipe with its child collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Server-assigned identifier
    pub id: RecipeId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Preparation time in minutes
    pub prep_time: u32,

    /// Cooking time in minutes
    pub cook_time: u32,

    pub servings: u32,

    pub category: Category,

    pub difficulty: Difficulty,

    /// Ingredients in the order the server returned them
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Instructions in the order the server returned them, which is not
    /// necessarily step order
    #[serde(default)]
    pub instructions: Vec<Instruction>,

    /// Opaque creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Opaque update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Recipe {
    /// Instructions ordered by step number, leaving the stored order alone.
    pub fn sorted_instructions(&self) -> Vec<&Instruction> {
        let mut steps: Vec<&Instruction> = self.instructions.iter().collect();
        steps.sort_by_key(|instruction| instruction.step_number);
        steps
    }

    /// Total active time in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

/// List projection of a recipe, without child collections.
///
/// The category query omits `servings` and `category`, so those are optional
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl RecipeSummary {
    /// Total active time in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: Some(recipe.servings),
            category: Some(recipe.category),
            difficulty: recipe.difficulty,
            created_at: recipe.created_at.clone(),
        }
    }
}

/// A persisted ingredient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Present once the server has stored the ingredient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A persisted instruction step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 1-based position that defines display order
    pub step_number: u32,
    pub description: String,
}
