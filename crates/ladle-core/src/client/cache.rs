//! Single-slot cache for the recipe collection query.

use std::sync::{Arc, RwLock};

use crate::models::RecipeSummary;

/// Holds at most one fetched collection.
///
/// The collection is shared read-only; a refresh swaps in a new `Arc`
/// instead of touching the old slice, so views holding the previous
/// snapshot keep a consistent copy.
#[derive(Debug, Default)]
pub struct CollectionCache {
    slot: RwLock<Option<Arc<[RecipeSummary]>>>,
}

impl CollectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<[RecipeSummary]>> {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Stores a freshly fetched collection and returns the shared snapshot.
    pub fn replace(&self, recipes: Vec<RecipeSummary>) -> Arc<[RecipeSummary]> {
        let snapshot: Arc<[RecipeSummary]> = recipes.into();
        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Drops the held collection so the next read goes to the server.
    pub fn invalidate(&self) {
        self.slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
    }

    pub fn is_cached(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }
}
