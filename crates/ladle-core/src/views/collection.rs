//! Recipe collection view: the fetched list plus local filter state.

use std::sync::Arc;

use log::{debug, warn};

use super::LoadState;
use crate::{
    client::Client,
    error::Result,
    models::{distinct_categories, Category, RecipeFilter, RecipeSummary},
};

/// Holds one fetched collection and filters it locally.
///
/// Changing the filter never issues a read. Only [`mount`](Self::mount) and
/// [`refresh`](Self::refresh) talk to the client.
#[derive(Debug, Default)]
pub struct CollectionView {
    state: LoadState,
    filter: RecipeFilter,
    mounted: bool,
}

impl CollectionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: RecipeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Performs the initial read. Later calls are no-ops.
    pub async fn mount(&mut self, client: &Client) -> &LoadState {
        if !self.mounted {
            self.mounted = true;
            let result = client.list_recipes().await;
            self.settle(result);
        }
        &self.state
    }

    /// Reads the collection again and replaces the held one wholesale.
    pub async fn refresh(&mut self, client: &Client) -> &LoadState {
        self.mounted = true;
        self.state = LoadState::Loading;
        let result = client.refresh_recipes().await;
        self.settle(result);
        &self.state
    }

    fn settle(&mut self, result: Result<Option<Arc<[RecipeSummary]>>>) {
        self.state = match result {
            Ok(Some(recipes)) => {
                debug!("Collection view holds {} recipes", recipes.len());
                LoadState::Loaded(recipes)
            }
            Ok(None) => {
                warn!("Server returned no recipe collection");
                LoadState::Missing
            }
            Err(e) => {
                warn!("Loading recipes failed: {e}");
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.filter.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    /// Recipes passing the current filter, in collection order. Empty until
    /// a collection is loaded.
    pub fn visible(&self) -> Vec<&RecipeSummary> {
        self.state
            .recipes()
            .map(|recipes| self.filter.apply(recipes))
            .unwrap_or_default()
    }

    /// Facet set of the held collection.
    pub fn categories(&self) -> Vec<Category> {
        self.state
            .recipes()
            .map(distinct_categories)
            .unwrap_or_default()
    }
}
