//! Command implementations for the API-Football fetcher

pub mod common;
pub mod daily_fetch;
pub mod single_fetch;
