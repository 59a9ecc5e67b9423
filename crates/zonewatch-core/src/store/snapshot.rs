// ── JSON snapshot store ──
//
// Reads a JSON export of the zones database once and serves every query
// from memory. Zones keep document order; a filter narrows the listing.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::CoreError;
use crate::model::{
    ChainId, Channel, Client, Connection, Endpoint, Topology, select_best_endpoint,
};
use crate::source::{TopologyStore, ZoneSource};

/// On-disk document: `{ "zones": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub zones: Vec<ZoneRecord>,
}

/// One zone as exported from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub chain_id: ChainId,
    #[serde(default)]
    pub lcd_addresses: Vec<LcdAddress>,
    #[serde(flatten)]
    pub topology: Topology,
}

/// An LCD address known for a zone and its last liveness probe result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LcdAddress {
    pub address: String,
    #[serde(default)]
    pub alive: bool,
    /// Missing heights rank below every observed height.
    #[serde(default)]
    pub last_block_height: Option<u64>,
}

impl LcdAddress {
    /// The address as a live endpoint, if it is alive and parses as a URL.
    fn as_live_endpoint(&self, zone: &ChainId) -> Option<Endpoint> {
        if !self.alive {
            return None;
        }
        let address = self.address.trim();
        if address.is_empty() {
            return None;
        }
        match Url::parse(address) {
            Ok(url) => Some(Endpoint::new(url, self.last_block_height.unwrap_or(0))),
            Err(e) => {
                warn!(zone = %zone, address, error = %e, "ignoring unparseable LCD address");
                None
            }
        }
    }
}

/// `ZoneSource` + `TopologyStore` over a [`SnapshotDocument`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    zones: IndexMap<ChainId, ZoneRecord>,
    filter: Option<HashSet<ChainId>>,
}

impl SnapshotStore {
    /// Read and parse a snapshot file.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CoreError::Store {
            message: format!("cannot read snapshot {}: {e}", path.display()),
        })?;
        let document: SnapshotDocument =
            serde_json::from_str(&raw).map_err(|e| CoreError::Store {
                message: format!("invalid snapshot {}: {e}", path.display()),
            })?;
        debug!(path = %path.display(), zones = document.zones.len(), "loaded snapshot");
        Ok(Self::from_document(document))
    }

    /// Index a parsed document. A repeated chain id replaces the earlier
    /// record but keeps its position.
    pub fn from_document(document: SnapshotDocument) -> Self {
        let mut zones = IndexMap::with_capacity(document.zones.len());
        for record in document.zones {
            let chain_id = record.chain_id.clone();
            if zones.insert(chain_id.clone(), record).is_some() {
                warn!(zone = %chain_id, "duplicate zone in snapshot, keeping the last record");
            }
        }
        Self {
            zones,
            filter: None,
        }
    }

    /// Only list the given zones. An empty filter lists everything.
    #[must_use]
    pub fn with_zone_filter(mut self, zones: impl IntoIterator<Item = ChainId>) -> Self {
        let filter: HashSet<ChainId> = zones.into_iter().collect();
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    fn topology(&self, zone: &ChainId) -> Option<&Topology> {
        self.zones.get(zone).map(|r| &r.topology)
    }
}

impl ZoneSource for SnapshotStore {
    fn list_zones(&self) -> Result<Vec<ChainId>, CoreError> {
        let Some(filter) = &self.filter else {
            return Ok(self.zones.keys().cloned().collect());
        };

        let mut unknown: Vec<&ChainId> = filter
            .iter()
            .filter(|z| !self.zones.contains_key(*z))
            .collect();
        unknown.sort();
        for zone in unknown {
            warn!(zone = %zone, "zone filter names a zone absent from the snapshot");
        }

        Ok(self
            .zones
            .keys()
            .filter(|z| filter.contains(*z))
            .cloned()
            .collect())
    }
}

impl TopologyStore for SnapshotStore {
    fn clients_of(&self, zone: &ChainId) -> Result<Vec<Client>, CoreError> {
        Ok(self
            .topology(zone)
            .map(|t| t.clients.clone())
            .unwrap_or_default())
    }

    fn connections_of(&self, zone: &ChainId) -> Result<Vec<Connection>, CoreError> {
        Ok(self
            .topology(zone)
            .map(|t| t.connections.clone())
            .unwrap_or_default())
    }

    fn channels_of(&self, zone: &ChainId) -> Result<Vec<Channel>, CoreError> {
        Ok(self
            .topology(zone)
            .map(|t| t.channels.clone())
            .unwrap_or_default())
    }

    fn best_remote_endpoint(&self, zone: &ChainId) -> Result<Option<Endpoint>, CoreError> {
        let Some(record) = self.zones.get(zone) else {
            return Ok(None);
        };
        Ok(select_best_endpoint(
            record
                .lcd_addresses
                .iter()
                .filter_map(|a| a.as_live_endpoint(zone)),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn store() -> SnapshotStore {
        let document: SnapshotDocument = serde_json::from_value(json!({
            "zones": [
                {
                    "chain_id": "cosmoshub-4",
                    "lcd_addresses": [
                        { "address": "https://lcd-a.example", "alive": true, "last_block_height": 900 },
                        { "address": "https://lcd-b.example", "alive": false, "last_block_height": 950 },
                        { "address": "not a url", "alive": true, "last_block_height": 999 },
                        { "address": "", "alive": true, "last_block_height": 1000 }
                    ],
                    "clients": [ { "client_id": "07-tendermint-0", "chain_id": "osmosis-1" } ],
                    "connections": [ { "connection_id": "connection-0", "client_id": "07-tendermint-0" } ],
                    "channels": [ {
                        "channel_id": "channel-141",
                        "connection_id": "connection-0",
                        "counterparty_channel_id": null,
                        "is_opened": true
                    } ]
                },
                { "chain_id": "osmosis-1" },
                { "chain_id": "juno-1", "lcd_addresses": [ { "address": "https://juno.example", "alive": false } ] }
            ]
        }))
        .unwrap();
        SnapshotStore::from_document(document)
    }

    #[test]
    fn zones_listed_in_document_order() {
        let zones = store().list_zones().unwrap();
        assert_eq!(
            zones,
            vec![
                ChainId::from("cosmoshub-4"),
                ChainId::from("osmosis-1"),
                ChainId::from("juno-1")
            ]
        );
    }

    #[test]
    fn filter_keeps_document_order() {
        let store = store().with_zone_filter([
            ChainId::from("juno-1"),
            ChainId::from("cosmoshub-4"),
            ChainId::from("evmos_9001-2"),
        ]);
        let zones = store.list_zones().unwrap();
        assert_eq!(zones, vec![ChainId::from("cosmoshub-4"), ChainId::from("juno-1")]);
    }

    #[test]
    fn stored_topology_is_served() {
        let store = store();
        let zone = ChainId::from("cosmoshub-4");

        let topology = store.topology_of(&zone).unwrap();

        assert_eq!(topology.clients, vec![Client::new("07-tendermint-0", "osmosis-1")]);
        assert_eq!(topology.channels[0].counterparty_channel_id, None);
        assert!(store.topology_of(&"osmosis-1".into()).unwrap().is_empty());
    }

    #[test]
    fn best_endpoint_skips_dead_blank_and_invalid_addresses() {
        let endpoint = store()
            .best_remote_endpoint(&"cosmoshub-4".into())
            .unwrap()
            .unwrap();
        assert_eq!(endpoint.url.as_str(), "https://lcd-a.example/");
        assert_eq!(endpoint.block_height, 900);
    }

    #[test]
    fn no_live_endpoint() {
        let store = store();
        assert!(store.best_remote_endpoint(&"juno-1".into()).unwrap().is_none());
        assert!(store.best_remote_endpoint(&"unknown-1".into()).unwrap().is_none());
    }

    #[test]
    fn open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, r#"{ "zones": [ { "chain_id": "stargaze-1" } ] }"#).unwrap();

        let store = SnapshotStore::open(&path).unwrap();

        assert_eq!(store.list_zones().unwrap(), vec![ChainId::from("stargaze-1")]);
    }

    #[test]
    fn open_reports_invalid_json_as_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{ zones: ").unwrap();

        let err = SnapshotStore::open(&path).unwrap_err();

        assert!(matches!(err, CoreError::Store { ref message } if message.contains("invalid snapshot")));
    }
}
