//! Command-line arguments.
//!
//! Argument structs carry the clap derives and convert into core types
//! explicitly, so the core crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params / Draft → Client, Views, Pipeline
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use ladle_core::{
    models::{Category, Difficulty, DraftIngredient, DraftRecipe},
    params::ListRecipes,
};

/// Browse, create and delete recipes on a GraphQL recipe server
#[derive(Parser)]
#[command(version, about, name = "ladle")]
pub struct Args {
    /// GraphQL endpoint. Overrides the config file.
    #[arg(long, global = true, env = "LADLE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Per-call timeout in seconds. Overrides the config file.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file. Defaults to $XDG_CONFIG_HOME/ladle/config.json
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use a built-in sample collection instead of the server
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the recipe collection (default)
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show the categories present in the collection
    Categories,
    /// Ask the server for every recipe in one category
    Browse(BrowseArgs),
    /// Show one recipe with its ingredients and steps
    Show(ShowArgs),
    /// Create a recipe with its ingredients and steps
    Add(AddArgs),
    /// Delete a recipe
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(ClapArgs)]
pub struct ListArgs {
    /// Keep only this category
    #[arg(short, long)]
    pub category: Option<Category>,
    /// Case-insensitive title search
    #[arg(short, long)]
    pub search: Option<String>,
}

impl From<ListArgs> for ListRecipes {
    fn from(val: ListArgs) -> Self {
        ListRecipes {
            category: val.category,
            search: val.search,
        }
    }
}

#[derive(ClapArgs)]
pub struct BrowseArgs {
    /// Category to query (breakfast, lunch, dinner, dessert, snack)
    pub category: Category,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Recipe ID
    pub id: String,
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    /// Recipe ID
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(ClapArgs)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Preparation time in minutes
    #[arg(long, default_value = "0")]
    pub prep_time: String,
    /// Cooking time in minutes
    #[arg(long, default_value = "0")]
    pub cook_time: String,
    #[arg(long, default_value = "1")]
    pub servings: String,
    #[arg(long)]
    pub category: Option<Category>,
    /// easy, medium or hard. Defaults to medium.
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
    /// "AMOUNT [UNIT] NAME", e.g. "2 cup flour" or "3 eggs". Repeatable.
    #[arg(long = "ingredient", value_name = "SPEC", value_parser = parse_ingredient)]
    pub ingredients: Vec<DraftIngredient>,
    /// One instruction step. Repeatable; numbered in order given.
    #[arg(long = "step", value_name = "TEXT")]
    pub steps: Vec<String>,
    /// Attach ingredients and steps at the same time
    #[arg(long)]
    pub concurrent_phases: bool,
}

impl From<AddArgs> for DraftRecipe {
    fn from(val: AddArgs) -> Self {
        let mut draft = DraftRecipe::new();
        for ingredient in val.ingredients {
            draft = draft.with_ingredient(ingredient);
        }
        // Blank steps keep their slot so later steps keep their numbers
        for (index, step) in val.steps.into_iter().enumerate() {
            if index > 0 {
                draft.add_instruction();
            }
            draft.set_instruction(index, step);
        }
        draft.title = val.title;
        draft.description = val.description;
        draft.prep_time = val.prep_time;
        draft.cook_time = val.cook_time;
        draft.servings = val.servings;
        draft.category = val.category;
        draft.difficulty = val.difficulty.unwrap_or_default();
        draft
    }
}

/// Parses `AMOUNT NAME` or `AMOUNT UNIT NAME...`.
fn parse_ingredient(spec: &str) -> Result<DraftIngredient, String> {
    let mut parts = spec.split_whitespace();
    let amount = parts
        .next()
        .ok_or_else(|| "ingredient must not be empty".to_string())?;
    let amount: f64 = amount
        .parse()
        .map_err(|_| format!("'{amount}' is not a number"))?;

    let rest: Vec<&str> = parts.collect();
    match rest.as_slice() {
        [] => Err(format!("ingredient '{spec}' has no name")),
        [name] => Ok(DraftIngredient::new(*name, amount, "")),
        [unit, name @ ..] => Ok(DraftIngredient::new(name.join(" "), amount, *unit)),
    }
}
