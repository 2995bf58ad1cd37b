//! In-memory gateway for tests and offline use.
//!
//! Behaves like the remote API for every operation, keeps an ordered log of
//! issued and resolved calls, and can be told to fail, delay or hang calls
//! matching an operation and key. Keys are the recipe id for recipe-level
//! operations, the ingredient name for [`Operation::AddIngredient`] and the
//! step number for [`Operation::AddInstruction`].

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard,
    },
    time::Duration,
};

use async_trait::async_trait;
use jiff::Timestamp;

use super::{
    CreatedRecipe, Operation, RecipeGateway, RecipeIngredients, RecipeInstructions,
};
use crate::{
    error::{LadleError, Result},
    models::{Category, Difficulty, Ingredient, Instruction, Recipe, RecipeId, RecipeSummary},
    params::{IngredientInput, InstructionInput, RecipeInput, UpdateRecipeInput},
};

/// Stage of a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPhase {
    Issued,
    Resolved { ok: bool },
}

/// One entry of the call log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayEvent {
    pub operation: Operation,
    pub key: String,
    pub phase: CallPhase,
}

#[derive(Debug, Clone)]
enum Fault {
    Fail,
    Delay(Duration),
    Hang,
}

#[derive(Debug, Clone)]
struct FaultRule {
    operation: Operation,
    key: Option<String>,
    fault: Fault,
}

#[derive(Debug, Default)]
struct Store {
    recipes: Vec<Recipe>,
    next_recipe_id: u64,
    next_child_id: u64,
    events: Vec<GatewayEvent>,
}

/// Fake remote API backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    store: Mutex<Store>,
    rules: Mutex<Vec<FaultRule>>,
    missing_collection: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway preloaded with a few sample recipes.
    pub fn seeded() -> Self {
        let gateway = Self::new();
        gateway.insert(sample(
            "Pancakes",
            "Fluffy buttermilk pancakes.",
            Category::Breakfast,
            Difficulty::Easy,
            &[("Flour", 2.0, "cup"), ("Buttermilk", 1.5, "cup"), ("Egg", 1.0, "")],
            &["Whisk the dry ingredients.", "Fold in buttermilk and egg.", "Cook on a hot griddle."],
        ));
        gateway.insert(sample(
            "Omelette",
            "Three-egg omelette with herbs.",
            Category::Breakfast,
            Difficulty::Medium,
            &[("Egg", 3.0, ""), ("Chives", 1.0, "tbsp")],
            &["Beat the eggs.", "Cook gently and fold."],
        ));
        gateway.insert(sample(
            "Pasta",
            "Weeknight tomato pasta.",
            Category::Dinner,
            Difficulty::Easy,
            &[("Spaghetti", 200.0, "g"), ("Tomato sauce", 1.0, "cup")],
            &["Boil the pasta.", "Warm the sauce.", "Toss together."],
        ));
        gateway
    }

    /// Stores a recipe as-is, assigning ids where they are missing.
    pub fn insert(&self, mut recipe: Recipe) -> RecipeId {
        let mut store = self.store();
        if recipe.id.as_str().is_empty() {
            store.next_recipe_id += 1;
            recipe.id = RecipeId(store.next_recipe_id.to_string());
        }
        for ingredient in &mut recipe.ingredients {
            if ingredient.id.is_none() {
                ingredient.id = Some(next_child_id(&mut store));
            }
        }
        for instruction in &mut recipe.instructions {
            if instruction.id.is_none() {
                instruction.id = Some(next_child_id(&mut store));
            }
        }
        let id = recipe.id.clone();
        store.recipes.push(recipe);
        id
    }

    /// Every call matching `operation` (and `key`, when given) fails.
    pub fn fail(&self, operation: Operation, key: Option<&str>) {
        self.add_rule(operation, key, Fault::Fail);
    }

    /// Matching calls resolve only after `delay`.
    pub fn delay(&self, operation: Operation, key: Option<&str>, delay: Duration) {
        self.add_rule(operation, key, Fault::Delay(delay));
    }

    /// Matching calls never resolve.
    pub fn hang(&self, operation: Operation, key: Option<&str>) {
        self.add_rule(operation, key, Fault::Hang);
    }

    /// Makes `list_recipes` answer with no collection.
    pub fn set_missing_collection(&self, missing: bool) {
        self.missing_collection.store(missing, Ordering::SeqCst);
    }

    /// Snapshot of the call log.
    pub fn events(&self) -> Vec<GatewayEvent> {
        self.store().events.clone()
    }

    /// Number of issued calls for `operation`.
    pub fn issued(&self, operation: Operation) -> usize {
        self.store()
            .events
            .iter()
            .filter(|e| e.operation == operation && e.phase == CallPhase::Issued)
            .count()
    }

    /// Snapshot of a stored recipe.
    pub fn recipe(&self, id: &RecipeId) -> Option<Recipe> {
        self.store().recipes.iter().find(|r| &r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn add_rule(&self, operation: Operation, key: Option<&str>, fault: Fault) {
        self.rules
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(FaultRule {
                operation,
                key: key.map(str::to_string),
                fault,
            });
    }

    fn record(&self, operation: Operation, key: &str, phase: CallPhase) {
        self.store().events.push(GatewayEvent {
            operation,
            key: key.to_string(),
            phase,
        });
    }

    /// Records the call, applies matching faults, then runs `apply` against
    /// the store.
    async fn call<T>(
        &self,
        operation: Operation,
        key: &str,
        apply: impl FnOnce(&mut Store) -> Result<T>,
    ) -> Result<T> {
        self.record(operation, key, CallPhase::Issued);

        let faults: Vec<Fault> = self
            .rules
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|rule| {
                rule.operation == operation && rule.key.as_deref().map_or(true, |k| k == key)
            })
            .map(|rule| rule.fault.clone())
            .collect();

        let mut failed = false;
        for fault in faults {
            match fault {
                Fault::Delay(delay) => tokio::time::sleep(delay).await,
                Fault::Hang => std::future::pending::<()>().await,
                Fault::Fail => failed = true,
            }
        }

        let outcome = if failed {
            Err(LadleError::remote(
                operation.as_str(),
                format!("injected failure for '{key}'"),
            ))
        } else {
            apply(&mut *self.store())
        };

        self.record(operation, key, CallPhase::Resolved { ok: outcome.is_ok() });
        outcome
    }
}

fn next_child_id(store: &mut Store) -> String {
    store.next_child_id += 1;
    format!("c{}", store.next_child_id)
}

fn find_mut<'a>(store: &'a mut Store, id: &RecipeId, operation: Operation) -> Result<&'a mut Recipe> {
    store
        .recipes
        .iter_mut()
        .find(|r| &r.id == id)
        .ok_or_else(|| LadleError::remote(operation.as_str(), format!("no recipe with id {id}")))
}

fn sample(
    title: &str,
    description: &str,
    category: Category,
    difficulty: Difficulty,
    ingredients: &[(&str, f64, &str)],
    steps: &[&str],
) -> Recipe {
    Recipe {
        id: RecipeId(String::new()),
        title: title.to_string(),
        description: description.to_string(),
        prep_time: 10,
        cook_time: 15,
        servings: 2,
        category,
        difficulty,
        ingredients: ingredients
            .iter()
            .map(|(name, amount, unit)| Ingredient {
                id: None,
                name: name.to_string(),
                amount: *amount,
                unit: (!unit.is_empty()).then(|| unit.to_string()),
            })
            .collect(),
        instructions: steps
            .iter()
            .enumerate()
            .map(|(index, text)| Instruction {
                id: None,
                step_number: index as u32 + 1,
                description: text.to_string(),
            })
            .collect(),
        created_at: Some(Timestamp::now().to_string()),
        updated_at: None,
    }
}

#[async_trait]
impl RecipeGateway for MemoryGateway {
    fn describe(&self) -> String {
        "in-memory store".to_string()
    }

    async fn list_recipes(&self) -> Result<Option<Vec<RecipeSummary>>> {
        let missing = self.missing_collection.load(Ordering::SeqCst);
        self.call(Operation::ListRecipes, "", |store| {
            if missing {
                return Ok(None);
            }
            Ok(Some(store.recipes.iter().map(RecipeSummary::from).collect()))
        })
        .await
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        self.call(Operation::GetRecipe, id.as_str(), |store| {
            Ok(store.recipes.iter().find(|r| &r.id == id).cloned())
        })
        .await
    }

    async fn recipes_by_category(&self, category: Category) -> Result<Vec<RecipeSummary>> {
        self.call(Operation::RecipesByCategory, category.as_str(), |store| {
            Ok(store
                .recipes
                .iter()
                .filter(|r| r.category == category)
                .map(|r| RecipeSummary {
                    servings: None,
                    category: None,
                    created_at: None,
                    ..RecipeSummary::from(r)
                })
                .collect())
        })
        .await
    }

    async fn create_recipe(&self, input: &RecipeInput) -> Result<CreatedRecipe> {
        self.call(Operation::CreateRecipe, &input.title, |store| {
            store.next_recipe_id += 1;
            let id = RecipeId(store.next_recipe_id.to_string());
            store.recipes.push(Recipe {
                id: id.clone(),
                title: input.title.clone(),
                description: input.description.clone(),
                prep_time: input.prep_time,
                cook_time: input.cook_time,
                servings: input.servings,
                category: input.category,
                difficulty: input.difficulty,
                ingredients: Vec::new(),
                instructions: Vec::new(),
                created_at: Some(Timestamp::now().to_string()),
                updated_at: None,
            });
            Ok(CreatedRecipe {
                id,
                title: input.title.clone(),
                description: input.description.clone(),
                category: input.category,
                difficulty: input.difficulty,
            })
        })
        .await
    }

    async fn update_recipe(&self, id: &RecipeId, input: &UpdateRecipeInput) -> Result<Recipe> {
        self.call(Operation::UpdateRecipe, id.as_str(), |store| {
            let mut ingredients = Vec::with_capacity(input.ingredients.len());
            for row in &input.ingredients {
                ingredients.push(Ingredient {
                    id: Some(next_child_id(store)),
                    name: row.name.clone(),
                    amount: row.amount,
                    unit: (!row.unit.is_empty()).then(|| row.unit.clone()),
                });
            }
            let mut instructions = Vec::with_capacity(input.instructions.len());
            for row in &input.instructions {
                instructions.push(Instruction {
                    id: Some(next_child_id(store)),
                    step_number: row.step_number,
                    description: row.description.clone(),
                });
            }

            let recipe = find_mut(store, id, Operation::UpdateRecipe)?;
            let scalars = &input.recipe;
            recipe.title = scalars.title.clone();
            recipe.description = scalars.description.clone();
            recipe.prep_time = scalars.prep_time;
            recipe.cook_time = scalars.cook_time;
            recipe.servings = scalars.servings;
            recipe.category = scalars.category;
            recipe.difficulty = scalars.difficulty;
            recipe.ingredients = ingredients;
            recipe.instructions = instructions;
            recipe.updated_at = Some(Timestamp::now().to_string());
            Ok(recipe.clone())
        })
        .await
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<bool> {
        self.call(Operation::DeleteRecipe, id.as_str(), |store| {
            let before = store.recipes.len();
            store.recipes.retain(|r| &r.id != id);
            Ok(store.recipes.len() < before)
        })
        .await
    }

    async fn add_ingredient(
        &self,
        recipe_id: &RecipeId,
        input: &IngredientInput,
    ) -> Result<RecipeIngredients> {
        self.call(Operation::AddIngredient, &input.name, |store| {
            let child_id = next_child_id(store);
            let recipe = find_mut(store, recipe_id, Operation::AddIngredient)?;
            recipe.ingredients.push(Ingredient {
                id: Some(child_id),
                name: input.name.clone(),
                amount: input.amount,
                unit: (!input.unit.is_empty()).then(|| input.unit.clone()),
            });
            Ok(RecipeIngredients {
                id: recipe.id.clone(),
                ingredients: recipe.ingredients.clone(),
            })
        })
        .await
    }

    async fn add_instruction(
        &self,
        recipe_id: &RecipeId,
        input: &InstructionInput,
    ) -> Result<RecipeInstructions> {
        let key = input.step_number.to_string();
        self.call(Operation::AddInstruction, &key, |store| {
            let child_id = next_child_id(store);
            let recipe = find_mut(store, recipe_id, Operation::AddInstruction)?;
            recipe.instructions.push(Instruction {
                id: Some(child_id),
                step_number: input.step_number,
                description: input.description.clone(),
            });
            Ok(RecipeInstructions {
                id: recipe.id.clone(),
                instructions: recipe.instructions.clone(),
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_collection() {
        let gateway = MemoryGateway::seeded();
        let recipes = gateway.list_recipes().await.unwrap().unwrap();
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Pancakes", "Omelette", "Pasta"]);
        assert_eq!(gateway.issued(Operation::ListRecipes), 1);
    }

    #[tokio::test]
    async fn test_fault_matches_key_only() {
        let gateway = MemoryGateway::seeded();
        gateway.fail(Operation::GetRecipe, Some("2"));

        assert!(gateway.get_recipe(&RecipeId::from("1")).await.is_ok());
        assert!(gateway.get_recipe(&RecipeId::from("2")).await.is_err());

        let events = gateway.events();
        assert_eq!(
            events.last().map(|e| e.phase),
            Some(CallPhase::Resolved { ok: false })
        );
    }

    #[tokio::test]
    async fn test_add_ingredient_returns_full_list() {
        let gateway = MemoryGateway::seeded();
        let id = RecipeId::from("3");
        let attached = gateway
            .add_ingredient(
                &id,
                &IngredientInput {
                    name: "Basil".to_string(),
                    amount: 4.0,
                    unit: "leaves".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(attached.ingredients.len(), 3);
        assert!(attached.ingredients.iter().all(|i| i.id.is_some()));
    }

    #[tokio::test]
    async fn test_delete_acknowledges_only_existing() {
        let gateway = MemoryGateway::seeded();
        assert!(gateway.delete_recipe(&RecipeId::from("1")).await.unwrap());
        assert!(!gateway.delete_recipe(&RecipeId::from("1")).await.unwrap());
        assert_eq!(gateway.len(), 2);
    }
}
