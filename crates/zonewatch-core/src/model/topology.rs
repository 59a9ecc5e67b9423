// ── IBC topology types ──

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The three layered IBC objects compared by the checker.
///
/// The display form is the subsection heading used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Clients,
    Connections,
    Channels,
}

/// An IBC object that can be matched by identifier and compared on its
/// designated attributes.
pub trait IbcEntity: fmt::Display {
    const KIND: EntityKind;

    /// Identifier, unique within one zone's set of this kind.
    fn id(&self) -> &str;

    /// Whether `remote` (same id) disagrees with `self` on the compared
    /// attributes. `self` is always the stored side.
    fn conflicts_with(&self, remote: &Self) -> bool;
}

// ── Client ──────────────────────────────────────────────────────────

/// A light client and the chain it tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: String,
    pub chain_id: String,
}

impl Client {
    pub fn new(client_id: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            chain_id: chain_id.into(),
        }
    }
}

impl IbcEntity for Client {
    const KIND: EntityKind = EntityKind::Clients;

    fn id(&self) -> &str {
        &self.client_id
    }

    fn conflicts_with(&self, remote: &Self) -> bool {
        self.chain_id != remote.chain_id
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clientId={}, chainId={}", self.client_id, self.chain_id)
    }
}

// ── Connection ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub connection_id: String,
    pub client_id: String,
}

impl Connection {
    pub fn new(connection_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            client_id: client_id.into(),
        }
    }
}

impl IbcEntity for Connection {
    const KIND: EntityKind = EntityKind::Connections;

    fn id(&self) -> &str {
        &self.connection_id
    }

    fn conflicts_with(&self, remote: &Self) -> bool {
        self.client_id != remote.client_id
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "connectionId={}, clientId={}",
            self.connection_id, self.client_id
        )
    }
}

// ── Channel ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: String,
    pub connection_id: String,
    /// `None` while the counterparty end is not yet known. A blank id
    /// means the same thing and is read as `None`.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub counterparty_channel_id: Option<String>,
    pub is_opened: bool,
}

impl Channel {
    pub fn new(
        channel_id: impl Into<String>,
        connection_id: impl Into<String>,
        counterparty_channel_id: Option<&str>,
        is_opened: bool,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            connection_id: connection_id.into(),
            counterparty_channel_id: counterparty_channel_id
                .filter(|id| !id.trim().is_empty())
                .map(String::from),
            is_opened,
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|id| !id.trim().is_empty()))
}

impl IbcEntity for Channel {
    const KIND: EntityKind = EntityKind::Channels;

    fn id(&self) -> &str {
        &self.channel_id
    }

    /// The counterparty id only counts when the stored side knows it: a
    /// stored `None` never conflicts, whatever the node reports.
    fn conflicts_with(&self, remote: &Self) -> bool {
        let counterparty_differs = self
            .counterparty_channel_id
            .as_ref()
            .is_some_and(|stored| remote.counterparty_channel_id.as_ref() != Some(stored));

        self.connection_id != remote.connection_id
            || counterparty_differs
            || self.is_opened != remote.is_opened
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "channelId={}, connectionId={}, counterpartyChannelId={}, isOpened={}",
            self.channel_id,
            self.connection_id,
            self.counterparty_channel_id.as_deref().unwrap_or("null"),
            self.is_opened
        )
    }
}

// ── Topology ────────────────────────────────────────────────────────

/// One zone's clients, connections and channels, from either side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// The live topology reported by a zone's node.
pub type RemoteSnapshot = Topology;

impl Topology {
    /// No clients, no connections and no channels.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.connections.is_empty() && self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rendering() {
        let client = Client::new("07-tendermint-0", "cosmoshub-4");
        insta::assert_snapshot!(client.to_string(), @"clientId=07-tendermint-0, chainId=cosmoshub-4");
    }

    #[test]
    fn connection_rendering() {
        let connection = Connection::new("connection-0", "07-tendermint-0");
        insta::assert_snapshot!(connection.to_string(), @"connectionId=connection-0, clientId=07-tendermint-0");
    }

    #[test]
    fn channel_rendering_shows_null_counterparty() {
        let channel = Channel::new("channel-0", "connection-0", None, false);
        insta::assert_snapshot!(
            channel.to_string(),
            @"channelId=channel-0, connectionId=connection-0, counterpartyChannelId=null, isOpened=false"
        );
    }

    #[test]
    fn kind_headings() {
        assert_eq!(EntityKind::Clients.to_string(), "Clients");
        assert_eq!(EntityKind::Connections.to_string(), "Connections");
        assert_eq!(EntityKind::Channels.to_string(), "Channels");
    }

    #[test]
    fn client_conflicts_on_chain_id_only() {
        let stored = Client::new("07-tendermint-0", "cosmoshub-4");
        assert!(!stored.conflicts_with(&stored.clone()));
        assert!(stored.conflicts_with(&Client::new("07-tendermint-0", "osmosis-1")));
    }

    #[test]
    fn connection_conflicts_on_client_id() {
        let stored = Connection::new("connection-0", "07-tendermint-0");
        assert!(stored.conflicts_with(&Connection::new("connection-0", "07-tendermint-9")));
    }

    #[test]
    fn null_stored_counterparty_never_conflicts() {
        let stored = Channel::new("channel-0", "connection-0", None, true);
        let remote = Channel::new("channel-0", "connection-0", Some("channel-141"), true);
        assert!(!stored.conflicts_with(&remote));
    }

    #[test]
    fn known_counterparty_must_match() {
        let stored = Channel::new("channel-0", "connection-0", Some("channel-141"), true);
        let changed = Channel::new("channel-0", "connection-0", Some("channel-142"), true);
        let unknown = Channel::new("channel-0", "connection-0", None, true);
        assert!(stored.conflicts_with(&changed));
        assert!(stored.conflicts_with(&unknown));
    }

    #[test]
    fn blank_stored_counterparty_reads_as_unknown() {
        let stored: Channel = serde_json::from_value(serde_json::json!({
            "channel_id": "channel-7",
            "connection_id": "connection-2",
            "counterparty_channel_id": "",
            "is_opened": false
        }))
        .unwrap_or_else(|e| panic!("channel should deserialize: {e}"));

        assert_eq!(stored.counterparty_channel_id, None);
        assert_eq!(stored, Channel::new("channel-7", "connection-2", Some(""), false));
    }

    #[test]
    fn channel_conflicts_on_open_flag_and_connection() {
        let stored = Channel::new("channel-0", "connection-0", Some("channel-141"), true);
        let closed = Channel::new("channel-0", "connection-0", Some("channel-141"), false);
        let moved = Channel::new("channel-0", "connection-3", Some("channel-141"), true);
        assert!(stored.conflicts_with(&closed));
        assert!(stored.conflicts_with(&moved));
    }

    #[test]
    fn topology_emptiness() {
        let mut topology = Topology::default();
        assert!(topology.is_empty());
        topology.channels.push(Channel::new("channel-0", "connection-0", None, true));
        assert!(!topology.is_empty());
    }
}
