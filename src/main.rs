//! Entry point: load configuration, set up logging, and dispatch.

use std::sync::Arc;

use anyhow::Context;
use apisports_fetch::{
    cli::{Cli, Commands},
    commands::{
        common::FetchContext,
        daily_fetch::handle_daily_fetch,
        single_fetch::{handle_fixtures, handle_injuries, handle_lineups},
    },
    core::{Config, SystemClock},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cli::parse();

    // .env is read from the working directory; a missing file is fine and
    // real environment variables still apply.
    dotenvy::dotenv().ok();
    init_logging(app.verbose);

    let mut config = Config::from_env().context("configuration incomplete")?;
    if let Some(dir) = app.output_dir.clone() {
        config = config.with_output_dir(dir);
    }
    tracing::debug!(?config, "Loaded configuration");

    let ctx = FetchContext::new(&config, Arc::new(SystemClock))?;

    match app.command() {
        Commands::Daily => handle_daily_fetch(&ctx).await?,
        Commands::Fixtures { from, to } => {
            handle_fixtures(&ctx, &from, &to).await?;
        }
        Commands::Injuries { season } => {
            handle_injuries(&ctx, season).await?;
        }
        Commands::Lineups { fixture } => {
            handle_lineups(&ctx, fixture).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
