//! Daily fetch: fixtures for the last two days, injuries for the current
//! season, then lineups for the first fixture returned.
//!
//! Every step runs in order and any failure stops the run. An empty fixture
//! list is not a failure; the lineups step is skipped.

use std::path::PathBuf;

use crate::{
    apisports::types::{first_fixture_id, response_items},
    DateRange, FixtureId, Result, Season,
};

use super::common::FetchContext;

/// Days before today included in the fixtures window.
pub const FIXTURE_WINDOW_DAYS: u64 = 2;

/// What a daily fetch wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub written: Vec<PathBuf>,
    /// Fixture whose lineups were fetched, if any.
    pub lineups_fixture: Option<FixtureId>,
}

/// Run the three-step fetch against an already-wired context.
pub async fn run_daily_fetch(ctx: &FetchContext) -> Result<FetchSummary> {
    let today = ctx.clock.today();
    let mut summary = FetchSummary::default();

    let window = DateRange::ending_on(today, FIXTURE_WINDOW_DAYS);
    tracing::info!(%window, "Fetching fixtures");
    let fixtures = ctx.client.fetch_fixtures(window).await?;
    summary.written.push(ctx.store.persist(&fixtures, "fixtures")?);

    let season = Season::containing(today);
    tracing::info!(%season, "Fetching injuries");
    let injuries = ctx.client.fetch_injuries(season).await?;
    summary.written.push(ctx.store.persist(&injuries, "injuries")?);

    match first_fixture_id(&fixtures)? {
        Some(fixture_id) => {
            let found = response_items(&fixtures).map_or(0, Vec::len);
            tracing::info!(%fixture_id, fixtures = found, "Fetching lineups for first fixture");
            let lineups = ctx.client.fetch_lineups(fixture_id).await?;
            let name = format!("lineups_{}", fixture_id);
            summary.written.push(ctx.store.persist(&lineups, &name)?);
            summary.lineups_fixture = Some(fixture_id);
        }
        None => tracing::info!("No fixtures in window, skipping lineups"),
    }

    Ok(summary)
}

/// Entry point for the `daily` command.
pub async fn handle_daily_fetch(ctx: &FetchContext) -> Result<()> {
    let summary = run_daily_fetch(ctx).await?;

    for path in &summary.written {
        println!("✓ Saved {}", path.display());
    }

    Ok(())
}
