// ── Collaborator contracts ──
//
// The checker only talks to these traits. Storage reads are synchronous;
// the remote fetch is async because it goes over HTTP, but the checker
// awaits it before moving to the next zone.

use std::future::Future;

use crate::error::CoreError;
use crate::model::{ChainId, Channel, Client, Connection, Endpoint, RemoteSnapshot, Topology};

/// Yields the zones to check, in check order.
pub trait ZoneSource {
    fn list_zones(&self) -> Result<Vec<ChainId>, CoreError>;
}

/// Persisted topology of every zone.
pub trait TopologyStore {
    fn clients_of(&self, zone: &ChainId) -> Result<Vec<Client>, CoreError>;

    fn connections_of(&self, zone: &ChainId) -> Result<Vec<Connection>, CoreError>;

    fn channels_of(&self, zone: &ChainId) -> Result<Vec<Channel>, CoreError>;

    /// The live endpoint with the highest observed block height, if any.
    fn best_remote_endpoint(&self, zone: &ChainId) -> Result<Option<Endpoint>, CoreError>;

    /// All three stored sets of a zone.
    fn topology_of(&self, zone: &ChainId) -> Result<Topology, CoreError> {
        Ok(Topology {
            clients: self.clients_of(zone)?,
            connections: self.connections_of(zone)?,
            channels: self.channels_of(zone)?,
        })
    }
}

/// Fetches the live topology of a zone from one of its endpoints.
pub trait RemoteFetcher {
    /// Fails with [`CoreError::Fetch`] when the endpoint is unreachable or
    /// returns malformed data.
    fn fetch_snapshot(
        &self,
        zone: &ChainId,
        endpoint: &Endpoint,
    ) -> impl Future<Output = Result<RemoteSnapshot, CoreError>> + Send;
}
