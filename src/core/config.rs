//! Runtime configuration for the fetcher.
//!
//! Built once at process entry and passed down explicitly. Values come from
//! the environment (after an optional `.env` file is loaded by `main`), or
//! are supplied directly with [`Config::new`] in tests.

use std::path::PathBuf;
use std::time::Duration;

use crate::{FetchError, Result};

pub const API_KEY_ENV_VAR: &str = "API_FOOTBALL_KEY";
pub const BASE_URL_ENV_VAR: &str = "API_FOOTBALL_URL";
pub const OUTPUT_DIR_ENV_VAR: &str = "RAW_DATA_DIR";
pub const TIMEOUT_ENV_VAR: &str = "API_FOOTBALL_TIMEOUT_SECS";

pub const DEFAULT_OUTPUT_DIR: &str = "data/raw";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    /// API root without a trailing slash.
    pub base_url: String,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("output_dir", &self.output_dir)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Build a config from explicit values, with default output dir and timeout.
    ///
    /// Fails with `MissingConfig` when either value is empty.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = require(API_KEY_ENV_VAR, Some(api_key.into()))?;
        let base_url = require(BASE_URL_ENV_VAR, Some(base_url.into()))?;

        Ok(Self {
            api_key,
            base_url: normalize_base_url(&base_url),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require(API_KEY_ENV_VAR, lookup(API_KEY_ENV_VAR))?;
        let base_url = require(BASE_URL_ENV_VAR, lookup(BASE_URL_ENV_VAR))?;
        let mut config = Self::new(api_key, base_url)?;

        if let Some(dir) = non_empty(lookup(OUTPUT_DIR_ENV_VAR)) {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(raw) = non_empty(lookup(TIMEOUT_ENV_VAR)) {
            let secs: u64 = raw.parse().map_err(|_| FetchError::InvalidConfig {
                var: TIMEOUT_ENV_VAR.to_string(),
                reason: format!("'{}' is not a whole number of seconds", raw),
            })?;
            if secs == 0 {
                return Err(FetchError::InvalidConfig {
                    var: TIMEOUT_ENV_VAR.to_string(),
                    reason: "timeout must be at least 1 second".to_string(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Full URL for an endpoint path such as `fixtures/lineups`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require(var: &str, value: Option<String>) -> Result<String> {
    non_empty(value).ok_or_else(|| FetchError::MissingConfig {
        var: var.to_string(),
    })
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
