//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{FixtureId, Season};

#[derive(Debug, Parser)]
#[clap(
    name = "apisports-fetch",
    about = "Fetch raw API-Football data and store it as dated JSON files"
)]
pub struct Cli {
    /// Directory for raw JSON files (or set `RAW_DATA_DIR`; default `data/raw`).
    ///
    /// Relative paths, including the default, resolve against the current
    /// working directory, as does the `.env` file. Run from the project root.
    #[clap(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run; no subcommand means the daily fetch.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Daily)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch fixtures for the last two days, this season's injuries,
    /// and the lineups of the first fixture found.
    Daily,

    /// Fetch fixtures in a date window (inclusive).
    Fixtures {
        /// First day, YYYY-MM-DD.
        #[clap(long)]
        from: String,

        /// Last day, YYYY-MM-DD.
        #[clap(long)]
        to: String,
    },

    /// Fetch injury reports for a season.
    Injuries {
        /// Season year (defaults to the current year).
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// Fetch lineups for a single fixture.
    Lineups {
        /// Fixture ID.
        #[clap(long)]
        fixture: FixtureId,
    },
}
