//! Typed client for the three API-Football endpoints the fetcher uses.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    apisports::{
        http::{ReqwestTransport, Transport},
        types::{Endpoint, API_KEY_HEADER},
    },
    core::Config,
    DateRange, FetchError, FixtureId, Result, Season,
};

pub struct ApiClient {
    config: Config,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Client over an arbitrary transport.
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        Ok(Self {
            config: config.clone(),
            headers,
            transport,
        })
    }

    /// Client over reqwest, using the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::new(config, Arc::new(transport))
    }

    /// `GET /fixtures?date_from=..&date_to=..`
    pub async fn fetch_fixtures(&self, range: DateRange) -> Result<Value> {
        if range.is_reversed() {
            tracing::warn!(%range, "Fixture window ends before it starts");
        }
        let params = [("date_from", range.from_param()), ("date_to", range.to_param())];
        self.get(Endpoint::Fixtures, &params).await
    }

    /// `GET /injuries?season=..`
    pub async fn fetch_injuries(&self, season: Season) -> Result<Value> {
        let params = [("season", season.to_string())];
        self.get(Endpoint::Injuries, &params).await
    }

    /// `GET /fixtures/lineups?fixture=..`
    pub async fn fetch_lineups(&self, fixture_id: FixtureId) -> Result<Value> {
        let params = [("fixture", fixture_id.to_string())];
        self.get(Endpoint::Lineups, &params).await
    }

    async fn get(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<Value> {
        let url = self.config.endpoint_url(endpoint.path());
        tracing::debug!(%url, ?params, "GET");

        let res = self.transport.get(&url, params, &self.headers).await?;

        if !res.is_success() {
            tracing::warn!(%url, status = res.status, "Request rejected");
            return Err(FetchError::Http {
                status: res.status,
                url,
                body: res.body,
            });
        }

        tracing::debug!(%url, status = res.status, bytes = res.body.len(), "Response received");
        Ok(serde_json::from_str(&res.body)?)
    }
}

#[cfg(test)]
pub(crate) mod fake;
