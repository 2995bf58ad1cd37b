//! Data models for recipes, their ingredients and instructions.
//!
//! The server is the source of truth for every persisted model here; the
//! client only reads them, except for [`DraftRecipe`], which lives purely in
//! client memory until the creation pipeline submits it.
//!
//! Wire names follow the remote API (camelCase fields, upper-case enum
//! values), so the same types decode GraphQL responses directly.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod draft;
pub mod filters;
pub mod recipe;


pub use draft::{DraftIngredient, DraftInstruction, DraftRecipe};
pub use filters::{distinct_categories, RecipeFilter};
pub use recipe::{Ingredient, Instruction, Recipe, RecipeSummary};

/// Opaque, server-assigned recipe identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Closed set of recipe categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
    ];

    /// Wire representation used by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "BREAKFAST",
            Category::Lunch => "LUNCH",
            Category::Dinner => "DINNER",
            Category::Dessert => "DESSERT",
            Category::Snack => "SNACK",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BREAKFAST" => Ok(Category::Breakfast),
            "LUNCH" => Ok(Category::Lunch),
            "DINNER" => Ok(Category::Dinner),
            "DESSERT" => Ok(Category::Dessert),
            "SNACK" => Ok(Category::Snack),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// Type-safe enumeration of recipe difficulty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire representation used by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}
