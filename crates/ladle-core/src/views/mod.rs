//! Screen-level state for the recipe views.
//!
//! Each view owns what it has fetched and decides which of its states the
//! user sees. Rendering lives in [`crate::display`]; navigation between views
//! is expressed as a [`Route`].

use std::{fmt, sync::Arc};

pub mod collection;
pub mod detail;

pub use collection::CollectionView;
pub use detail::{AutoConfirm, Confirm, DeleteOutcome, DetailState, DetailView};

use crate::models::{RecipeId, RecipeSummary};

/// Navigation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Collection,
    Detail(RecipeId),
    NewRecipe,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Collection => write!(f, "/"),
            Route::Detail(id) => write!(f, "/recipe/{id}"),
            Route::NewRecipe => write!(f, "/add"),
        }
    }
}

/// Outcome of reading the recipe collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    /// The read failed; holds the error message
    Failed(String),
    /// The server answered without a collection
    Missing,
    Loaded(Arc<[RecipeSummary]>),
}

impl LoadState {
    pub fn recipes(&self) -> Option<&[RecipeSummary]> {
        match self {
            LoadState::Loaded(recipes) => Some(recipes),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
