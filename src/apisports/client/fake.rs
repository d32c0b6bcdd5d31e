//! In-memory transport for unit tests.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::sync::Mutex;

use crate::apisports::http::{RawResponse, Transport};
use crate::Result;

/// One request as seen by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub api_key: Option<String>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Answers requests by URL suffix and records everything it receives.
/// Unrouted URLs get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Vec<(String, RawResponse)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, suffix: &str, status: u16, body: &str) -> Self {
        self.routes
            .push((suffix.to_string(), RawResponse::new(status, body)));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &HeaderMap,
    ) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            api_key: headers
                .get("x-apisports-key")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });

        let res = self
            .routes
            .iter()
            .find(|(suffix, _)| url.ends_with(suffix.as_str()))
            .map(|(_, res)| res.clone())
            .unwrap_or_else(|| RawResponse::new(404, "{\"message\":\"no route\"}"));
        Ok(res)
    }
}
