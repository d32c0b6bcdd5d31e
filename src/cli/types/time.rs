//! Date-related types: seasons and fixture date windows.

use crate::error::{FetchError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire format for every date sent to the API.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// The season a calendar date falls in: its year.
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.year().clamp(0, u16::MAX as i32) as u16)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_api_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), API_DATE_FORMAT).map_err(|_| FetchError::InvalidDate {
        value: value.to_string(),
    })
}

/// Inclusive window of calendar dates used to scope a fixtures query.
///
/// Ordering is left to the caller; the API decides what a reversed window means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Window covering the `days` days before `end` through `end` itself.
    pub fn ending_on(end: NaiveDate, days: u64) -> Self {
        let from = end
            .checked_sub_days(chrono::Days::new(days))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to: end }
    }

    pub fn is_reversed(&self) -> bool {
        self.from > self.to
    }

    /// `date_from` as sent on the wire.
    pub fn from_param(&self) -> String {
        self.from.format(API_DATE_FORMAT).to_string()
    }

    /// `date_to` as sent on the wire.
    pub fn to_param(&self) -> String {
        self.to.format(API_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from_param(), self.to_param())
    }
}
