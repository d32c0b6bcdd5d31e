//! Source of "today" for date windows and file stamps.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
