//! ID types for API-Football resources.

use crate::error::{FetchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for API-Football fixture (match) IDs.
///
/// # Examples
///
/// ```rust
/// use apisports_fetch::FixtureId;
///
/// let fixture_id = FixtureId::new(4521);
/// assert_eq!(fixture_id.as_u64(), 4521);
/// assert_eq!(fixture_id.to_string(), "4521");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixtureId(pub u64);

impl FixtureId {
    /// Create a new FixtureId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FixtureId {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
