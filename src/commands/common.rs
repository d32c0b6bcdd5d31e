//! Shared setup for every fetch command.

use std::sync::Arc;

use crate::{
    apisports::ApiClient,
    core::{Clock, Config, RawStore},
    Result,
};

/// Client, store and clock wired from one [`Config`].
pub struct FetchContext {
    pub client: ApiClient,
    pub store: RawStore,
    pub clock: Arc<dyn Clock>,
}

impl FetchContext {
    /// Wire the reqwest-backed client and the on-disk store.
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let client = ApiClient::from_config(config)?;
        Ok(Self::from_parts(client, config, clock))
    }

    pub fn from_parts(client: ApiClient, config: &Config, clock: Arc<dyn Clock>) -> Self {
        let store = RawStore::new(config.output_dir.clone(), clock.clone());
        Self {
            client,
            store,
            clock,
        }
    }
}
