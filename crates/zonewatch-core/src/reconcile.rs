// ── Stored vs. remote set comparison ──
//
// Each comparison is a pure function of its two input sets: both sides are
// indexed by identifier once, then walked in input order. Mismatches are
// only recorded from the stored side so a pair is never reported twice.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::model::{ChainId, Channel, Client, Connection, IbcEntity, RemoteSnapshot, Topology};

/// A stored entity and the remote entity with the same id that disagrees
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch<T> {
    pub stored: T,
    pub remote: T,
}

/// Discrepancies for one entity kind of one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult<T> {
    /// Same id on both sides, differing attributes. Ordered by the stored
    /// entity's textual representation.
    pub mismatched: Vec<Mismatch<T>>,
    /// Present remotely, absent from the store ("Not in DB"), in remote
    /// input order.
    pub missing_in_store: Vec<T>,
    /// Present in the store, absent remotely ("Not in IBC"), in stored
    /// input order.
    pub missing_in_remote: Vec<T>,
}

impl<T> Default for DiffResult<T> {
    fn default() -> Self {
        Self {
            mismatched: Vec::new(),
            missing_in_store: Vec::new(),
            missing_in_remote: Vec::new(),
        }
    }
}

impl<T> DiffResult<T> {
    pub fn is_empty(&self) -> bool {
        self.mismatched.is_empty()
            && self.missing_in_store.is_empty()
            && self.missing_in_remote.is_empty()
    }

    /// Total number of discrepancy entries.
    pub fn len(&self) -> usize {
        self.mismatched.len() + self.missing_in_store.len() + self.missing_in_remote.len()
    }
}

/// Index a set by identifier. The first entity with a given id wins.
fn index_by_id<T: IbcEntity>(entities: &[T]) -> HashMap<&str, &T> {
    let mut index = HashMap::with_capacity(entities.len());
    for entity in entities {
        index.entry(entity.id()).or_insert(entity);
    }
    index
}

/// Compare the stored and remote sets of one entity kind.
pub fn diff<T: IbcEntity + Clone>(stored: &[T], remote: &[T]) -> DiffResult<T> {
    let remote_by_id = index_by_id(remote);
    let stored_by_id = index_by_id(stored);

    let missing_in_remote = stored
        .iter()
        .filter(|s| !remote_by_id.contains_key(s.id()))
        .cloned()
        .collect();

    // Keyed by rendering: sorted output, and a repeated stored entity
    // collapses onto one line.
    let mismatched: BTreeMap<String, Mismatch<T>> = stored
        .iter()
        .filter_map(|s| {
            let r = remote_by_id.get(s.id())?;
            s.conflicts_with(r).then(|| {
                let entry = Mismatch {
                    stored: s.clone(),
                    remote: (*r).clone(),
                };
                (s.to_string(), entry)
            })
        })
        .collect();

    let missing_in_store = remote
        .iter()
        .filter(|r| !stored_by_id.contains_key(r.id()))
        .cloned()
        .collect();

    DiffResult {
        mismatched: mismatched.into_values().collect(),
        missing_in_store,
        missing_in_remote,
    }
}

/// All discrepancies found for one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneDiff {
    pub chain_id: ChainId,
    pub clients: DiffResult<Client>,
    pub connections: DiffResult<Connection>,
    pub channels: DiffResult<Channel>,
}

impl ZoneDiff {
    /// A zone with nothing to report.
    pub fn empty(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            clients: DiffResult::default(),
            connections: DiffResult::default(),
            channels: DiffResult::default(),
        }
    }

    /// Compare a zone's stored topology with the live one.
    pub fn compute(chain_id: ChainId, stored: &Topology, remote: &RemoteSnapshot) -> Self {
        Self {
            chain_id,
            clients: diff(&stored.clients, &remote.clients),
            connections: diff(&stored.connections, &remote.connections),
            channels: diff(&stored.channels, &remote.channels),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.connections.is_empty() && self.channels.is_empty()
    }

    /// Total number of discrepancy entries across the three kinds.
    pub fn discrepancy_count(&self) -> usize {
        self.clients.len() + self.connections.len() + self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(id: &str, chain: &str) -> Client {
        Client::new(id, chain)
    }

    fn channel(id: &str, conn: &str, cp: Option<&str>, open: bool) -> Channel {
        Channel::new(id, conn, cp, open)
    }

    #[test]
    fn identical_sets_produce_no_diff() {
        let topology = Topology {
            clients: vec![client("07-tendermint-0", "osmosis-1")],
            connections: vec![Connection::new("connection-0", "07-tendermint-0")],
            channels: vec![channel("channel-0", "connection-0", Some("channel-141"), true)],
        };

        let diff = ZoneDiff::compute("cosmoshub-4".into(), &topology, &topology.clone());

        assert!(diff.is_empty());
        assert_eq!(diff.discrepancy_count(), 0);
    }

    #[test]
    fn client_chain_mismatch_is_keyed_by_stored_side() {
        let stored = [client("07-tendermint-0", "cosmoshub-4")];
        let remote = [client("07-tendermint-0", "osmosis-1")];

        let result = diff(&stored, &remote);

        assert_eq!(
            result.mismatched,
            vec![Mismatch {
                stored: stored[0].clone(),
                remote: remote[0].clone(),
            }]
        );
        assert!(result.missing_in_store.is_empty());
        assert!(result.missing_in_remote.is_empty());
    }

    #[test]
    fn store_only_entity_is_missing_in_remote_once() {
        let stored = [
            Connection::new("connection-0", "07-tendermint-0"),
            Connection::new("connection-1", "07-tendermint-1"),
        ];
        let remote = [Connection::new("connection-0", "07-tendermint-0")];

        let result = diff(&stored, &remote);

        assert_eq!(result.missing_in_remote, vec![stored[1].clone()]);
        assert!(result.missing_in_store.is_empty());
        assert!(result.mismatched.is_empty());
    }

    #[test]
    fn remote_only_channel_is_missing_in_store() {
        let remote = [channel("channel-0", "connection-0", Some("channel-9"), true)];

        let result = diff(&[], &remote);

        assert_eq!(result.missing_in_store, vec![remote[0].clone()]);
        assert!(result.missing_in_remote.is_empty());
    }

    #[test]
    fn mismatched_entity_is_not_also_missing() {
        let stored = [client("07-tendermint-3", "juno-1")];
        let remote = [client("07-tendermint-3", "stargaze-1")];

        let result = diff(&stored, &remote);

        assert_eq!(result.len(), 1);
        assert_eq!(result.mismatched.len(), 1);
    }

    #[test]
    fn null_counterparty_does_not_register_mismatch() {
        let stored = [channel("channel-5", "connection-2", None, true)];
        let remote = [channel("channel-5", "connection-2", Some("channel-77"), true)];

        assert!(diff(&stored, &remote).is_empty());
    }

    #[test]
    fn mismatches_sorted_by_stored_rendering() {
        let stored = [
            client("07-tendermint-9", "a-1"),
            client("07-tendermint-10", "b-1"),
            client("07-tendermint-2", "c-1"),
        ];
        let remote = [
            client("07-tendermint-2", "x-1"),
            client("07-tendermint-9", "x-1"),
            client("07-tendermint-10", "x-1"),
        ];

        let result = diff(&stored, &remote);

        let keys: Vec<&str> = result
            .mismatched
            .iter()
            .map(|m| m.stored.client_id.as_str())
            .collect();
        assert_eq!(keys, ["07-tendermint-10", "07-tendermint-2", "07-tendermint-9"]);
    }

    #[test]
    fn missing_entries_keep_input_order() {
        let stored = [
            Connection::new("connection-9", "07-tendermint-0"),
            Connection::new("connection-1", "07-tendermint-0"),
        ];
        let remote = [
            Connection::new("connection-7", "07-tendermint-0"),
            Connection::new("connection-3", "07-tendermint-0"),
        ];

        let result = diff(&stored, &remote);

        let not_in_ibc: Vec<&str> = result
            .missing_in_remote
            .iter()
            .map(|c| c.connection_id.as_str())
            .collect();
        let not_in_db: Vec<&str> = result
            .missing_in_store
            .iter()
            .map(|c| c.connection_id.as_str())
            .collect();
        assert_eq!(not_in_ibc, ["connection-9", "connection-1"]);
        assert_eq!(not_in_db, ["connection-7", "connection-3"]);
    }

    #[test]
    fn first_remote_duplicate_wins() {
        let stored = [client("07-tendermint-0", "osmosis-1")];
        let remote = [
            client("07-tendermint-0", "osmosis-1"),
            client("07-tendermint-0", "juno-1"),
        ];

        let result = diff(&stored, &remote);

        assert!(result.mismatched.is_empty());
        assert!(result.missing_in_store.is_empty());
    }

    #[test]
    fn channel_kinds_stay_in_channel_result() {
        let stored = Topology {
            channels: vec![channel("channel-0", "connection-0", Some("channel-1"), true)],
            ..Topology::default()
        };
        let remote = Topology {
            channels: vec![channel("channel-0", "connection-0", Some("channel-1"), false)],
            ..Topology::default()
        };

        let diff = ZoneDiff::compute("osmosis-1".into(), &stored, &remote);

        assert_eq!(diff.channels.mismatched.len(), 1);
        assert!(diff.connections.is_empty());
        assert!(diff.clients.is_empty());
    }
}
