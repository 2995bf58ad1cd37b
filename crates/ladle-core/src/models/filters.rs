//! Client-side filter and facet derivation over a fetched collection.

use super::{Category, RecipeSummary};

/// Filter options applied to the held recipe collection.
///
/// Both criteria are evaluated locally; changing them never issues a read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Keep only this category. `None` keeps every category.
    pub category: Option<Category>,

    /// Case-insensitive substring match on the title. Empty matches all.
    pub search: String,
}

impl RecipeFilter {
    pub fn new(category: Option<Category>, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Whether the filter lets every recipe through.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_empty()
    }

    pub fn matches(&self, recipe: &RecipeSummary) -> bool {
        let matches_category = match self.category {
            Some(category) => recipe.category == Some(category),
            None => true,
        };
        let matches_search = self.search.is_empty()
            || recipe
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        matches_category && matches_search
    }

    /// Applies the filter, keeping collection order.
    pub fn apply<'a>(&self, recipes: &'a [RecipeSummary]) -> Vec<&'a RecipeSummary> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

/// The facet set: distinct categories present in `recipes`, in first-seen
/// order.
pub fn distinct_categories(recipes: &[RecipeSummary]) -> Vec<Category> {
    let mut seen = Vec::new();
    for category in recipes.iter().filter_map(|recipe| recipe.category) {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
