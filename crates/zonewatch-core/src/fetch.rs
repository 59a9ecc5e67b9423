// ── LCD-backed remote fetcher ──
//
// One `reqwest::Client` is built per run; every zone gets a throwaway
// `LcdClient` pointed at its selected endpoint.

use tracing::debug;
use zonewatch_api::LcdClient;

use crate::config::CheckerConfig;
use crate::error::CoreError;
use crate::model::{ChainId, Endpoint, RemoteSnapshot};
use crate::source::RemoteFetcher;

/// Fetches a zone's live topology from its LCD endpoint.
pub struct LcdFetcher {
    http: reqwest::Client,
    page_limit: u32,
}

impl LcdFetcher {
    /// Build the shared HTTP client from the run's transport settings.
    pub fn new(config: &CheckerConfig) -> Result<Self, CoreError> {
        let http = config.transport().build_client()?;
        Ok(Self::with_client(http, config.page_limit))
    }

    pub fn with_client(http: reqwest::Client, page_limit: u32) -> Self {
        Self { http, page_limit }
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Result<RemoteSnapshot, zonewatch_api::Error> {
        let client = LcdClient::with_client(self.http.clone(), endpoint.url.clone())
            .with_page_limit(self.page_limit);

        let clients = client.list_client_states().await?;
        let connections = client.list_connections().await?;
        let channels = client.list_channels().await?;

        Ok(RemoteSnapshot {
            clients: clients.into_iter().map(Into::into).collect(),
            connections: connections.into_iter().map(Into::into).collect(),
            channels: channels.into_iter().map(Into::into).collect(),
        })
    }
}

impl RemoteFetcher for LcdFetcher {
    async fn fetch_snapshot(
        &self,
        zone: &ChainId,
        endpoint: &Endpoint,
    ) -> Result<RemoteSnapshot, CoreError> {
        debug!(zone = %zone, endpoint = %endpoint.url, "fetching IBC data");
        let snapshot = self
            .fetch(endpoint)
            .await
            .map_err(|e| {
                debug!(zone = %zone, transient = e.is_transient(), not_found = e.is_not_found(), "LCD query failed");
                CoreError::fetch(zone, &endpoint.url, &e)
            })?;
        debug!(
            zone = %zone,
            clients = snapshot.clients.len(),
            connections = snapshot.connections.len(),
            channels = snapshot.channels.len(),
            "fetched IBC data"
        );
        Ok(snapshot)
    }
}
