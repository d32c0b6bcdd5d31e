//! HTTP transport for API-Football requests.
//!
//! The client talks to the network only through [`Transport`], so tests can
//! swap in canned responses without a socket.

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use std::time::Duration;

use crate::Result;

/// Status and body of a completed request, before any status checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET request. Non-2xx statuses are returned, not raised.
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &HeaderMap,
    ) -> Result<RawResponse>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("apisports-fetch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &HeaderMap,
    ) -> Result<RawResponse> {
        let res = self
            .client
            .get(url)
            .headers(headers.clone())
            .query(query)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(RawResponse { status, body })
    }
}
