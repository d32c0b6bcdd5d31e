//! Type-safe wrappers for API-Football query parameters.

pub mod ids;
pub mod time;

pub use ids::FixtureId;
pub use time::{parse_api_date, DateRange, Season, API_DATE_FORMAT};
