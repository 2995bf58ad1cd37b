//! High-level client API over the remote gateway.
//!
//! The [`Client`] is what views and the creation pipeline talk to. It adds
//! two things on top of a bare [`RecipeGateway`]:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Views/Pipeline  │───▶│     Client      │───▶│    Gateway      │
//! │                 │    │ timeout + cache │    │ (GraphQL/memory)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - every remote call is bounded by the configured timeout, so a hung
//!   request surfaces as [`LadleError::Timeout`] instead of blocking forever
//! - the collection query keeps one in-memory result, dropped whenever a
//!   write changes the set of recipes
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ladle_core::{ClientBuilder, MemoryGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new()
//!     .with_gateway(Arc::new(MemoryGateway::seeded()))
//!     .build()?;
//!
//! let count = client.list_recipes().await?.map_or(0, |recipes| recipes.len());
//! println!("{count} recipes");
//! # Ok(())
//! # }
//! ```

use std::{future::Future, sync::Arc, time::Duration};

use log::{debug, warn};

pub mod builder;
pub mod cache;

#[cfg(test)]
mod tests;

pub use builder::ClientBuilder;
pub use cache::CollectionCache;

use crate::{
    error::{LadleError, Result},
    gateway::{
        CreatedRecipe, Operation, RecipeGateway, RecipeIngredients, RecipeInstructions,
    },
    models::{Category, Recipe, RecipeId, RecipeSummary},
    params::{IngredientInput, InstructionInput, RecipeInput, UpdateRecipeInput},
    pipeline::PhaseOrdering,
};

/// Main client interface for reading and writing recipes.
pub struct Client {
    gateway: Arc<dyn RecipeGateway>,
    timeout: Duration,
    phase_ordering: PhaseOrdering,
    collection: CollectionCache,
}

impl Client {
    pub(crate) fn new(
        gateway: Arc<dyn RecipeGateway>,
        timeout: Duration,
        phase_ordering: PhaseOrdering,
    ) -> Self {
        Self {
            gateway,
            timeout,
            phase_ordering,
            collection: CollectionCache::new(),
        }
    }

    /// Where remote calls go, for user-facing messages.
    pub fn target(&self) -> String {
        self.gateway.describe()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn phase_ordering(&self) -> PhaseOrdering {
        self.phase_ordering
    }

    /// Runs one remote call under the configured timeout.
    async fn call<T, F>(&self, operation: Operation, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        debug!("Calling {operation}");
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{operation} timed out after {:?}", self.timeout);
                Err(LadleError::Timeout {
                    operation: operation.as_str(),
                    after: self.timeout,
                })
            }
        }
    }

    /// The recipe collection, served from the cache when present.
    ///
    /// Returns `None` when the server answered without a collection.
    pub async fn list_recipes(&self) -> Result<Option<Arc<[RecipeSummary]>>> {
        if let Some(cached) = self.collection.get() {
            debug!("Serving {} recipes from cache", cached.len());
            return Ok(Some(cached));
        }

        let fetched = self
            .call(Operation::ListRecipes, self.gateway.list_recipes())
            .await?;
        Ok(fetched.map(|recipes| self.collection.replace(recipes)))
    }

    /// Drops the cached collection and reads it again.
    pub async fn refresh_recipes(&self) -> Result<Option<Arc<[RecipeSummary]>>> {
        self.collection.invalidate();
        self.list_recipes().await
    }

    /// Forgets the cached collection without reading it again.
    pub fn invalidate_collection(&self) {
        debug!("Invalidating cached recipe collection");
        self.collection.invalidate();
    }

    pub fn has_cached_collection(&self) -> bool {
        self.collection.is_cached()
    }

    /// Retrieves a recipe with its ingredients and instructions.
    pub async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        self.call(Operation::GetRecipe, self.gateway.get_recipe(id))
            .await
    }

    /// Retrieves a recipe, treating absence as an error.
    pub async fn require_recipe(&self, id: &RecipeId) -> Result<Recipe> {
        self.get_recipe(id)
            .await?
            .ok_or_else(|| LadleError::RecipeNotFound { id: id.to_string() })
    }

    /// Server-side category query. Not cached.
    pub async fn recipes_by_category(&self, category: Category) -> Result<Vec<RecipeSummary>> {
        self.call(
            Operation::RecipesByCategory,
            self.gateway.recipes_by_category(category),
        )
        .await
    }

    pub async fn create_recipe(&self, input: &RecipeInput) -> Result<CreatedRecipe> {
        let created = self
            .call(Operation::CreateRecipe, self.gateway.create_recipe(input))
            .await?;
        self.invalidate_collection();
        Ok(created)
    }

    pub async fn update_recipe(&self, id: &RecipeId, input: &UpdateRecipeInput) -> Result<Recipe> {
        let updated = self
            .call(Operation::UpdateRecipe, self.gateway.update_recipe(id, input))
            .await?;
        self.invalidate_collection();
        Ok(updated)
    }

    /// Deletes a recipe. The cache is dropped only when the server
    /// acknowledged the delete.
    pub async fn delete_recipe(&self, id: &RecipeId) -> Result<bool> {
        let acknowledged = self
            .call(Operation::DeleteRecipe, self.gateway.delete_recipe(id))
            .await?;
        if acknowledged {
            self.invalidate_collection();
        }
        Ok(acknowledged)
    }

    pub async fn add_ingredient(
        &self,
        recipe_id: &RecipeId,
        input: &IngredientInput,
    ) -> Result<RecipeIngredients> {
        self.call(
            Operation::AddIngredient,
            self.gateway.add_ingredient(recipe_id, input),
        )
        .await
    }

    pub async fn add_instruction(
        &self,
        recipe_id: &RecipeId,
        input: &InstructionInput,
    ) -> Result<RecipeInstructions> {
        self.call(
            Operation::AddInstruction,
            self.gateway.add_instruction(recipe_id, input),
        )
        .await
    }
}
