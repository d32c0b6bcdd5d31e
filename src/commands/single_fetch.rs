//! One-endpoint commands: fetch a single resource and store it.

use std::path::PathBuf;

use crate::{cli::types::parse_api_date, DateRange, FixtureId, Result, Season};

use super::common::FetchContext;

/// Fetch fixtures between two `YYYY-MM-DD` dates (inclusive).
pub async fn handle_fixtures(ctx: &FetchContext, from: &str, to: &str) -> Result<PathBuf> {
    let range = DateRange::new(parse_api_date(from)?, parse_api_date(to)?);
    let fixtures = ctx.client.fetch_fixtures(range).await?;
    let path = ctx.store.persist(&fixtures, "fixtures")?;

    println!("✓ Saved {}", path.display());
    Ok(path)
}

/// Fetch injuries for `season`, or the current year when not given.
pub async fn handle_injuries(ctx: &FetchContext, season: Option<Season>) -> Result<PathBuf> {
    let season = season.unwrap_or_else(|| Season::containing(ctx.clock.today()));
    let injuries = ctx.client.fetch_injuries(season).await?;
    let path = ctx.store.persist(&injuries, "injuries")?;

    println!("✓ Saved {}", path.display());
    Ok(path)
}

/// Fetch lineups for one fixture.
pub async fn handle_lineups(ctx: &FetchContext, fixture_id: FixtureId) -> Result<PathBuf> {
    let lineups = ctx.client.fetch_lineups(fixture_id).await?;
    let path = ctx
        .store
        .persist(&lineups, &format!("lineups_{}", fixture_id))?;

    println!("✓ Saved {}", path.display());
    Ok(path)
}
