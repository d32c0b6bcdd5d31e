//! Error types for the API-Football raw data fetcher

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{var} environment variable not set or empty")]
    MissingConfig { var: String },

    #[error("Invalid value for {var}: {reason}")]
    InvalidConfig { var: String, reason: String },

    #[error("API returned HTTP {status} for {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Unexpected response shape: {detail}")]
    UnexpectedShape { detail: String },
}

impl FetchError {
    /// HTTP status carried by an `Http` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
