//! Core library for the Ladle recipe client.
//!
//! Recipes live behind a remote GraphQL API. This crate holds the data
//! model, the gateway that talks to the API, the collection and detail view
//! logic, and the creation pipeline that turns one draft into a recipe with
//! its ingredients and instructions.
//!
//! # Layers
//!
//! - [`gateway`]: typed remote operations behind the [`RecipeGateway`] trait,
//!   with a GraphQL implementation and an in-memory one
//! - [`client`]: per-call timeouts and the cached collection
//! - [`views`]: collection filtering, recipe detail, the delete flow
//! - [`pipeline`]: create recipe, then attach ingredients, then attach
//!   instructions
//! - [`display`]: markdown formatting for all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use ladle_core::{views::CollectionView, ClientBuilder, MemoryGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new()
//!     .with_gateway(Arc::new(MemoryGateway::seeded()))
//!     .build()?;
//!
//! let mut view = CollectionView::new();
//! view.mount(&client).await;
//! view.set_search("pan");
//! for recipe in view.visible() {
//!     println!("{}", recipe.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod params;
pub mod pipeline;
pub mod views;

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::Config;
pub use display::{
    Categories, CollectionPage, CreateResult, DeleteResult, DetailPage, OperationStatus,
    RecipeSummaries,
};
pub use error::{LadleError, Result};
pub use gateway::{GraphqlGateway, MemoryGateway, Operation, RecipeGateway};
pub use models::{
    Category, Difficulty, DraftRecipe, Recipe, RecipeFilter, RecipeId, RecipeSummary,
};
pub use pipeline::{CreationPipeline, CreationReport, PhaseOrdering, PipelineState};
pub use views::{CollectionView, DeleteOutcome, DetailView, Route};
