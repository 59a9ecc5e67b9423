// ── In-memory topology store ──

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::model::{
    ChainId, Channel, Client, Connection, Endpoint, Topology, select_best_endpoint,
};
use crate::source::{TopologyStore, ZoneSource};

#[derive(Debug, Clone, Default)]
struct ZoneEntry {
    topology: Topology,
    endpoints: Vec<Endpoint>,
}

/// Zones held in memory, listed in insertion order.
///
/// Every endpoint given to the store is considered live.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    zones: IndexMap<ChainId, ZoneEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a zone.
    #[must_use]
    pub fn with_zone(
        mut self,
        chain_id: impl Into<ChainId>,
        topology: Topology,
        endpoints: Vec<Endpoint>,
    ) -> Self {
        self.zones.insert(
            chain_id.into(),
            ZoneEntry {
                topology,
                endpoints,
            },
        );
        self
    }

    fn entry(&self, zone: &ChainId) -> Option<&ZoneEntry> {
        self.zones.get(zone)
    }
}

impl ZoneSource for MemoryStore {
    fn list_zones(&self) -> Result<Vec<ChainId>, CoreError> {
        Ok(self.zones.keys().cloned().collect())
    }
}

impl TopologyStore for MemoryStore {
    fn clients_of(&self, zone: &ChainId) -> Result<Vec<Client>, CoreError> {
        Ok(self
            .entry(zone)
            .map(|e| e.topology.clients.clone())
            .unwrap_or_default())
    }

    fn connections_of(&self, zone: &ChainId) -> Result<Vec<Connection>, CoreError> {
        Ok(self
            .entry(zone)
            .map(|e| e.topology.connections.clone())
            .unwrap_or_default())
    }

    fn channels_of(&self, zone: &ChainId) -> Result<Vec<Channel>, CoreError> {
        Ok(self
            .entry(zone)
            .map(|e| e.topology.channels.clone())
            .unwrap_or_default())
    }

    fn best_remote_endpoint(&self, zone: &ChainId) -> Result<Option<Endpoint>, CoreError> {
        Ok(self
            .entry(zone)
            .and_then(|e| select_best_endpoint(e.endpoints.iter().cloned())))
    }
}
