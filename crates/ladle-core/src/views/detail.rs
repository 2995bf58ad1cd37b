//! Recipe detail view and the delete flow.

use async_trait::async_trait;
use log::{info, warn};

use super::Route;
use crate::{
    client::Client,
    models::{Instruction, Recipe, RecipeId},
};

/// Question put to the user before a recipe is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this recipe?";

/// Asks the user to confirm a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// What the detail view shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// The read for this identifier has not settled yet
    Loading(RecipeId),
    /// No identifier was supplied, so nothing was fetched
    MissingId,
    NotFound(RecipeId),
    /// The read failed; holds the error message
    Failed(String),
    Loaded(Recipe),
}

/// Result of [`DetailView::delete`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Cancelled,
    Deleted { next: Route },
    /// The view stays on the recipe
    Failed { message: String },
}

/// One recipe, fetched by identifier.
#[derive(Debug, Clone)]
pub struct DetailView {
    state: DetailState,
}

impl DetailView {
    /// A view waiting on `id`, or settled as missing when there is none.
    pub fn new(id: Option<RecipeId>) -> Self {
        let state = match id {
            Some(id) => DetailState::Loading(id),
            None => DetailState::MissingId,
        };
        Self { state }
    }

    /// Fetches the recipe with `id`.
    pub async fn load(client: &Client, id: Option<RecipeId>) -> Self {
        let mut view = Self::new(id);
        view.fetch(client).await;
        view
    }

    /// Performs the read for a loading view. Settled views are left alone.
    pub async fn fetch(&mut self, client: &Client) -> &DetailState {
        if let DetailState::Loading(id) = &self.state {
            let id = id.clone();
            self.state = match client.get_recipe(&id).await {
                Ok(Some(recipe)) => DetailState::Loaded(recipe),
                Ok(None) => DetailState::NotFound(id),
                Err(e) => {
                    warn!("Loading recipe {id} failed: {e}");
                    DetailState::Failed(e.to_string())
                }
            };
        }
        &self.state
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.state {
            DetailState::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }

    /// Instructions in step order. Empty unless a recipe is loaded.
    pub fn sorted_instructions(&self) -> Vec<&Instruction> {
        self.recipe()
            .map(Recipe::sorted_instructions)
            .unwrap_or_default()
    }

    /// Deletes the loaded recipe once `confirm` agrees.
    ///
    /// A declined prompt sends nothing. A failed or unacknowledged delete
    /// leaves the view on the recipe and is not retried.
    pub async fn delete(&self, client: &Client, confirm: &dyn Confirm) -> DeleteOutcome {
        let Some(recipe) = self.recipe() else {
            return DeleteOutcome::Failed {
                message: "No recipe is loaded".to_string(),
            };
        };

        if !confirm.confirm(DELETE_PROMPT).await {
            info!("Delete of recipe {} cancelled", recipe.id);
            return DeleteOutcome::Cancelled;
        }

        match client.delete_recipe(&recipe.id).await {
            Ok(true) => {
                info!("Deleted recipe {}", recipe.id);
                DeleteOutcome::Deleted {
                    next: Route::Collection,
                }
            }
            Ok(false) => {
                warn!("Server did not acknowledge delete of recipe {}", recipe.id);
                DeleteOutcome::Failed {
                    message: format!("Recipe {} was not deleted", recipe.id),
                }
            }
            Err(e) => {
                warn!("Deleting recipe {} failed: {e}", recipe.id);
                DeleteOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}
