//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections,
//! operation results and whole view screens get wrapper types so the same
//! data can be formatted for different contexts. Everything is markdown,
//! meant for the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Models & Views  │    │ Display Wrappers│    │   Formatted     │
//! │ (Recipe, pages) │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (RecipeSummaries, Categories)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: Status messages (OperationStatus)
//! - [`datetime`]: Timestamp formatting
//! - [`views`]: Collection and detail screens, one message per state
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use ladle_core::display::OperationStatus;
//!
//! let status = OperationStatus::failure("Recipe 3 was not deleted");
//! assert_eq!(status.to_string(), "Error: Recipe 3 was not deleted\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

pub use collections::{Categories, RecipeSummaries};
pub use datetime::{LocalDateTime, ServerTime};
pub use results::{CreateResult, DeleteResult, DeletedRecipe};
pub use status::{OperationStatus, StatusKind};
pub use views::{CollectionPage, DetailPage};
