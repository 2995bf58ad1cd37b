//! Command handlers.
//!
//! Each handler drives one view or the creation pipeline through the core
//! client and renders the resulting markdown.

use anyhow::{bail, Context, Result};
use ladle_core::{
    display::{
        Categories, CollectionPage, CreateResult, DeleteResult, DeletedRecipe, DetailPage,
        OperationStatus, RecipeSummaries,
    },
    models::{Category, DraftRecipe, RecipeId},
    params::ListRecipes,
    pipeline::{CreationPipeline, PhaseOrdering},
    views::{
        AutoConfirm, CollectionView, Confirm, DeleteOutcome, DetailState, DetailView, LoadState,
        Route,
    },
    Client,
};
use log::debug;

use crate::{confirm::StdinConfirm, renderer::TerminalRenderer};

pub struct Cli {
    client: Client,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: Client, renderer: TerminalRenderer) -> Self {
        Self { client, renderer }
    }

    pub fn target(&self) -> String {
        self.client.target()
    }

    /// Shows whatever `route` points at.
    async fn navigate(&self, route: &Route) -> Result<()> {
        debug!("Navigating to {route}");
        match route {
            Route::Collection => self.list(&ListRecipes::default()).await,
            Route::Detail(id) => self.show(id.clone()).await,
            Route::NewRecipe => self
                .renderer
                .render("Use `ladle add` to create a recipe.\n"),
        }
    }

    pub async fn list(&self, params: &ListRecipes) -> Result<()> {
        let mut view = CollectionView::new().with_filter(params.into());
        view.mount(&self.client).await;
        let target = self.client.target();
        self.renderer
            .render(&CollectionPage::new(&view, &target).to_string())?;
        if let LoadState::Failed(message) = view.state() {
            bail!("Failed to load recipes: {message}");
        }
        Ok(())
    }

    pub async fn categories(&self) -> Result<()> {
        let mut view = CollectionView::new();
        view.mount(&self.client).await;
        if !matches!(view.state(), LoadState::Loaded(_)) {
            let target = self.client.target();
            self.renderer
                .render(&CollectionPage::new(&view, &target).to_string())?;
            bail!("Failed to load recipes");
        }

        let output = format!("# Categories\n\n{}", Categories(view.categories()));
        self.renderer.render(&output)
    }

    pub async fn browse(&self, category: Category) -> Result<()> {
        let recipes = self
            .client
            .recipes_by_category(category)
            .await
            .with_context(|| format!("Failed to browse {} recipes", category.label()))?;
        let output = format!(
            "# {} Recipes\n\n{}",
            category.label(),
            RecipeSummaries(recipes.iter().collect())
        );
        self.renderer.render(&output)
    }

    pub async fn show(&self, id: RecipeId) -> Result<()> {
        let view = DetailView::load(&self.client, Some(id)).await;
        self.renderer.render(&DetailPage(&view).to_string())?;
        match view.state() {
            DetailState::Loaded(_) => Ok(()),
            DetailState::Loading(id) => bail!("Recipe {id} did not finish loading"),
            DetailState::NotFound(id) => bail!("Recipe {id} not found"),
            DetailState::MissingId => bail!("No recipe ID given"),
            DetailState::Failed(message) => bail!("Failed to load recipe: {message}"),
        }
    }

    pub async fn add(&self, draft: DraftRecipe, concurrent: bool) -> Result<()> {
        let mut pipeline = CreationPipeline::new(&self.client);
        if concurrent {
            pipeline = pipeline.with_ordering(PhaseOrdering::Concurrent);
        }

        let report = pipeline
            .submit(&draft)
            .await
            .context("Failed to create recipe")?;
        let next = report.next.clone();

        self.renderer
            .render(&format!("{}\n", CreateResult::new(report)))?;
        self.navigate(&next).await
    }

    pub async fn delete(&self, id: RecipeId, yes: bool) -> Result<()> {
        let view = DetailView::load(&self.client, Some(id)).await;
        let Some(recipe) = view.recipe() else {
            self.renderer.render(&DetailPage(&view).to_string())?;
            bail!("Nothing to delete");
        };
        let deleted = DeletedRecipe {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
        };

        let confirm: Box<dyn Confirm> = if yes {
            Box::new(AutoConfirm(true))
        } else {
            Box::new(StdinConfirm)
        };

        match view.delete(&self.client, confirm.as_ref()).await {
            DeleteOutcome::Cancelled => {
                let status = OperationStatus::notice("Delete cancelled. Nothing was sent.");
                self.renderer.render(&status.to_string())
            }
            DeleteOutcome::Deleted { next } => {
                self.renderer
                    .render(&format!("{}\n", DeleteResult::new(deleted)))?;
                self.navigate(&next).await
            }
            DeleteOutcome::Failed { message } => {
                self.renderer
                    .render(&OperationStatus::failure(message.as_str()).to_string())?;
                bail!("Failed to delete recipe {}", deleted.id)
            }
        }
    }
}
