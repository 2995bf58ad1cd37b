//! Ladle CLI Application
//!
//! Command-line front end for the ladle recipe client.

mod args;
mod cli;
mod confirm;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use ladle_core::{models::RecipeId, params::ListRecipes, ClientBuilder, Config, MemoryGateway};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        endpoint,
        timeout,
        config,
        no_color,
        offline,
        command,
    } = Args::parse();

    let mut config = Config::load(config.as_deref()).context("Failed to load configuration")?;
    if let Some(secs) = timeout {
        config = config.with_timeout_secs(secs);
    }
    let mut builder = ClientBuilder::new()
        .with_config(config)
        .with_endpoint(endpoint);
    if offline {
        builder = builder.with_gateway(Arc::new(MemoryGateway::seeded()));
    }
    let client = builder.build().context("Failed to initialize client")?;

    let cli = Cli::new(client, TerminalRenderer::new(!no_color));
    info!("Ladle started against {}", cli.target());

    match command {
        Some(List(args)) => cli.list(&args.into()).await,
        Some(Categories) => cli.categories().await,
        Some(Browse(args)) => cli.browse(args.category).await,
        Some(Show(args)) => cli.show(RecipeId::from(args.id)).await,
        Some(Add(args)) => {
            let concurrent = args.concurrent_phases;
            cli.add(args.into(), concurrent).await
        }
        Some(Delete(args)) => cli.delete(RecipeId::from(args.id), args.yes).await,
        None => cli.list(&ListRecipes::default()).await,
    }
}
