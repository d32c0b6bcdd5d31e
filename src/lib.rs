//! API-Football raw data fetcher
//!
//! Pulls fixtures, injury reports, and lineups from the API-Football
//! (api-sports.io) REST API and stores each response verbatim as a dated
//! JSON file, ready for later processing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use apisports_fetch::{
//!     commands::{common::FetchContext, daily_fetch::run_daily_fetch},
//!     core::{Config, SystemClock},
//! };
//!
//! # async fn example() -> apisports_fetch::Result<()> {
//! let config = Config::from_env()?;
//! let ctx = FetchContext::new(&config, Arc::new(SystemClock))?;
//!
//! let summary = run_daily_fetch(&ctx).await?;
//! for path in summary.written {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export API_FOOTBALL_KEY=your-key
//! export API_FOOTBALL_URL=https://v3.football.api-sports.io
//! ```
//!
//! A `.env` file in the working directory is read by the binary as well.

pub mod apisports;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use cli::types::{DateRange, FixtureId, Season};
pub use error::{FetchError, Result};
