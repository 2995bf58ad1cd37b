//! Whole-screen output for the collection and detail views.
//!
//! Every view state has its own message, so a failed read never looks like
//! an empty collection and a missing recipe never looks like a network error.

use std::fmt;

use super::collections::RecipeSummaries;
use crate::views::{CollectionView, DetailState, DetailView, LoadState};

/// The collection view as shown to the user.
pub struct CollectionPage<'a> {
    pub view: &'a CollectionView,
    /// Where the collection was read from, for the failure hint
    pub target: &'a str,
}

impl<'a> CollectionPage<'a> {
    pub fn new(view: &'a CollectionView, target: &'a str) -> Self {
        Self { view, target }
    }
}

impl fmt::Display for CollectionPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view.state() {
            LoadState::Loading => writeln!(f, "Loading recipes..."),
            LoadState::Failed(message) => {
                writeln!(f, "# Error Loading Recipes")?;
                writeln!(f)?;
                writeln!(f, "{message}")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Please make sure the GraphQL server is running at {}",
                    self.target
                )
            }
            LoadState::Missing => writeln!(
                f,
                "No recipes available. Please check your connection to the server."
            ),
            LoadState::Loaded(_) => {
                writeln!(f, "# Recipe Collection")?;
                writeln!(f)?;

                let filter = self.view.filter();
                if let Some(category) = filter.category {
                    writeln!(f, "- Category: {category}")?;
                }
                if !filter.search.is_empty() {
                    writeln!(f, "- Search: {}", filter.search)?;
                }
                if !filter.is_empty() {
                    writeln!(f)?;
                }

                write!(f, "{}", RecipeSummaries(self.view.visible()))
            }
        }
    }
}

/// The detail view as shown to the user.
pub struct DetailPage<'a>(pub &'a DetailView);

impl fmt::Display for DetailPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.state() {
            DetailState::Loading(_) => writeln!(f, "Loading recipe..."),
            DetailState::MissingId => writeln!(f, "No recipe ID was given."),
            DetailState::NotFound(id) => writeln!(f, "Recipe not found (ID: {id})"),
            DetailState::Failed(message) => writeln!(f, "Error: {message}"),
            DetailState::Loaded(recipe) => write!(f, "{recipe}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        client::{Client, ClientBuilder},
        gateway::{MemoryGateway, Operation},
        models::{Category, RecipeId},
    };

    fn create_test_client(gateway: MemoryGateway) -> Client {
        ClientBuilder::new()
            .with_gateway(Arc::new(gateway))
            .build()
            .expect("Failed to create client")
    }

    #[tokio::test]
    async fn test_collection_states_render_distinctly() {
        let loading = CollectionView::new();
        assert_eq!(
            CollectionPage::new(&loading, "here").to_string(),
            "Loading recipes...\n"
        );

        let gateway = MemoryGateway::seeded();
        gateway.fail(Operation::ListRecipes, None);
        let client = create_test_client(gateway);
        let mut failed = CollectionView::new();
        failed.mount(&client).await;
        let output = CollectionPage::new(&failed, "http://example.test/graphql").to_string();
        assert!(output.contains("# Error Loading Recipes"));
        assert!(output.contains("running at http://example.test/graphql"));

        let gateway = MemoryGateway::seeded();
        gateway.set_missing_collection(true);
        let client = create_test_client(gateway);
        let mut missing = CollectionView::new();
        missing.mount(&client).await;
        assert!(CollectionPage::new(&missing, "")
            .to_string()
            .starts_with("No recipes available."));
    }

    #[tokio::test]
    async fn test_filtered_collection_output() {
        let client = create_test_client(MemoryGateway::seeded());
        let mut view = CollectionView::new();
        view.mount(&client).await;
        view.set_category(Some(Category::Dinner));

        let output = CollectionPage::new(&view, "").to_string();
        assert!(output.contains("- Category: Dinner"));
        assert!(output.contains("## Pasta"));
        assert!(!output.contains("## Pancakes"));

        view.set_search("zzz");
        let output = CollectionPage::new(&view, "").to_string();
        assert!(output.contains("No recipes found."));
    }

    #[tokio::test]
    async fn test_detail_states_render_distinctly() {
        let client = create_test_client(MemoryGateway::seeded());

        let loading = DetailView::new(Some(RecipeId::from("2")));
        assert_eq!(DetailPage(&loading).to_string(), "Loading recipe...\n");

        let missing = DetailView::load(&client, None).await;
        assert_eq!(DetailPage(&missing).to_string(), "No recipe ID was given.\n");

        let not_found = DetailView::load(&client, Some(RecipeId::from("77"))).await;
        assert_eq!(
            DetailPage(&not_found).to_string(),
            "Recipe not found (ID: 77)\n"
        );

        let loaded = DetailView::load(&client, Some(RecipeId::from("2"))).await;
        assert!(DetailPage(&loaded).to_string().starts_with("# Omelette"));
    }
}
