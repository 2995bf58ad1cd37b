//! Recipe creation pipeline.
//!
//! Submitting a [`DraftRecipe`] takes three dependent groups of remote writes:
//!
//! 1. create the base recipe from its scalar fields, which yields the id
//! 2. attach every submittable ingredient to that id
//! 3. attach every submittable instruction to that id
//!
//! Phase 1 is the only fatal step: without an id nothing else can be sent.
//! Within phases 2 and 3 all calls are in flight together behind a
//! [`JoinBarrier`], and a failed attach is logged and reported but does not
//! stop the pipeline. Every submission that gets past phase 1 ends in
//! [`PipelineState::Done`] and routes back to the collection view.
//!
//! Under [`PhaseOrdering::Sequential`] (the default) phase 3 starts only once
//! every phase-2 call has resolved. [`PhaseOrdering::Concurrent`] runs both
//! phases side by side.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ladle_core::{
//!     models::{Category, DraftIngredient, DraftRecipe},
//!     ClientBuilder, CreationPipeline, MemoryGateway,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new()
//!     .with_gateway(Arc::new(MemoryGateway::new()))
//!     .build()?;
//!
//! let mut draft = DraftRecipe::new()
//!     .with_ingredient(DraftIngredient::new("Oats", 1.0, "cup"))
//!     .with_instruction("Simmer with milk.");
//! draft.title = "Porridge".to_string();
//! draft.category = Some(Category::Breakfast);
//!
//! let report = CreationPipeline::new(&client).submit(&draft).await?;
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

use log::{error, info, warn};

pub mod barrier;
pub mod state;


pub use barrier::JoinBarrier;
pub use state::{ChildPhase, PhaseOrdering, PipelineState};

use crate::{
    client::Client,
    error::{LadleError, Result},
    gateway::CreatedRecipe,
    models::{DraftRecipe, Ingredient, Instruction, RecipeId},
    params::{IngredientInput, InstructionInput},
    views::Route,
};

/// A child write that did not go through.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachFailure {
    /// Ingredient name or `step N`
    pub label: String,
    pub message: String,
}

/// Outcome of one attach phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReport<T> {
    /// Calls sent
    pub issued: usize,
    /// Calls that succeeded
    pub attached: usize,
    /// Draft rows left out as empty placeholders
    pub skipped: usize,
    pub failures: Vec<AttachFailure>,
    /// Child collection reported by the call that resolved last
    pub latest: Option<Vec<T>>,
}

impl<T> PhaseReport<T> {
    fn from_resolved(kind: &str, skipped: usize, resolved: Vec<(String, Result<Vec<T>>)>) -> Self {
        let mut report = Self {
            issued: resolved.len(),
            attached: 0,
            skipped,
            failures: Vec::new(),
            latest: None,
        };

        for (label, outcome) in resolved {
            match outcome {
                Ok(children) => {
                    report.attached += 1;
                    report.latest = Some(children);
                }
                Err(e) => {
                    warn!("Failed to attach {kind} '{label}': {e}");
                    report.failures.push(AttachFailure {
                        label,
                        message: e.to_string(),
                    });
                }
            }
        }
        report
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Everything a finished submission produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationReport {
    pub recipe: CreatedRecipe,
    pub ingredients: PhaseReport<Ingredient>,
    pub instructions: PhaseReport<Instruction>,
    /// Where the user goes next
    pub next: Route,
}

impl CreationReport {
    /// Whether every child write succeeded.
    pub fn is_complete(&self) -> bool {
        self.ingredients.is_complete() && self.instructions.is_complete()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AttachFailure> {
        self.ingredients
            .failures
            .iter()
            .chain(self.instructions.failures.iter())
    }
}

/// Orchestrates one draft submission.
pub struct CreationPipeline<'a> {
    client: &'a Client,
    ordering: PhaseOrdering,
    state: PipelineState,
    history: Vec<PipelineState>,
}

impl<'a> CreationPipeline<'a> {
    /// A pipeline using the client's configured phase ordering.
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            ordering: client.phase_ordering(),
            state: PipelineState::Idle,
            history: vec![PipelineState::Idle],
        }
    }

    pub fn with_ordering(mut self, ordering: PhaseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Every state visited so far, starting with `Idle`.
    pub fn history(&self) -> &[PipelineState] {
        &self.history
    }

    fn transition(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid pipeline transition {} -> {}",
            self.state,
            next
        );
        info!("Creation pipeline: {} -> {}", self.state, next);
        self.state = next;
        self.history.push(next);
    }

    /// Submits `draft`.
    ///
    /// # Errors
    ///
    /// - `LadleError::InvalidInput` if the scalar fields do not validate, or
    ///   this pipeline was already used; no remote call is made
    /// - `LadleError::CreateRecipe` if the base recipe write fails; no child
    ///   call is made and the pipeline ends in `Failed`
    ///
    /// Child attach failures are not errors; they are listed in the report.
    pub async fn submit(&mut self, draft: &DraftRecipe) -> Result<CreationReport> {
        if self.state != PipelineState::Idle {
            return Err(LadleError::invalid_input("pipeline")
                .with_reason(format!("already used (currently {})", self.state)));
        }

        let input = draft.to_input()?;
        let ingredients = draft.ingredient_inputs();
        let instructions = draft.instruction_inputs();
        let skipped_ingredients = draft.ingredients().len() - ingredients.len();
        let skipped_instructions = draft.instructions().len() - instructions.len();

        self.transition(PipelineState::SubmittingRecipe);
        let recipe = match self.client.create_recipe(&input).await {
            Ok(recipe) => recipe,
            Err(e) => {
                error!("Creating recipe '{}' failed: {e}", input.title);
                self.transition(PipelineState::Failed);
                return Err(LadleError::CreateRecipe {
                    source: Box::new(e),
                });
            }
        };
        info!("Created recipe {} ('{}')", recipe.id, recipe.title);

        let client = self.client;
        let (ingredients, instructions) = match self.ordering {
            PhaseOrdering::Sequential => {
                self.transition(PipelineState::AttachingChildren(ChildPhase::Ingredients));
                let ingredients =
                    attach_ingredients(client, &recipe.id, &ingredients, skipped_ingredients)
                        .await;
                self.transition(PipelineState::AttachingChildren(ChildPhase::Instructions));
                let instructions =
                    attach_instructions(client, &recipe.id, &instructions, skipped_instructions)
                        .await;
                (ingredients, instructions)
            }
            PhaseOrdering::Concurrent => {
                self.transition(PipelineState::AttachingChildren(ChildPhase::Both));
                tokio::join!(
                    attach_ingredients(client, &recipe.id, &ingredients, skipped_ingredients),
                    attach_instructions(client, &recipe.id, &instructions, skipped_instructions),
                )
            }
        };

        self.transition(PipelineState::Done);
        Ok(CreationReport {
            recipe,
            ingredients,
            instructions,
            next: Route::Collection,
        })
    }
}

async fn attach_ingredients(
    client: &Client,
    recipe_id: &RecipeId,
    rows: &[IngredientInput],
    skipped: usize,
) -> PhaseReport<Ingredient> {
    info!("Attaching {} ingredient(s) to recipe {recipe_id}", rows.len());
    let barrier: JoinBarrier<_> = rows
        .iter()
        .map(|row| async move {
            let outcome = client.add_ingredient(recipe_id, row).await;
            (row.name.clone(), outcome.map(|attached| attached.ingredients))
        })
        .collect();
    PhaseReport::from_resolved("ingredient", skipped, barrier.join().await)
}

async fn attach_instructions(
    client: &Client,
    recipe_id: &RecipeId,
    rows: &[InstructionInput],
    skipped: usize,
) -> PhaseReport<Instruction> {
    info!("Attaching {} instruction(s) to recipe {recipe_id}", rows.len());
    let barrier: JoinBarrier<_> = rows
        .iter()
        .map(|row| async move {
            let outcome = client.add_instruction(recipe_id, row).await;
            (
                format!("step {}", row.step_number),
                outcome.map(|attached| attached.instructions),
            )
        })
        .collect();
    PhaseReport::from_resolved("instruction", skipped, barrier.join().await)
}
