// ── API-to-domain type conversions ──
//
// Bridges raw `zonewatch_api` LCD types into the canonical topology types
// so remote entities render exactly like stored ones.

use zonewatch_api::lcd::models::{IdentifiedChannel, IdentifiedClientState, IdentifiedConnection};

use crate::model::{Channel, Client, Connection};

/// Clients without a chain id (solo machine, localhost) get an empty one.
impl From<IdentifiedClientState> for Client {
    fn from(raw: IdentifiedClientState) -> Self {
        let chain_id = raw.chain_id().unwrap_or_default().to_owned();
        Self {
            client_id: raw.client_id,
            chain_id,
        }
    }
}

impl From<IdentifiedConnection> for Connection {
    fn from(raw: IdentifiedConnection) -> Self {
        Self {
            connection_id: raw.id,
            client_id: raw.client_id,
        }
    }
}

impl From<IdentifiedChannel> for Channel {
    fn from(raw: IdentifiedChannel) -> Self {
        Self {
            connection_id: raw.connection_id().unwrap_or_default().to_owned(),
            counterparty_channel_id: raw.counterparty_channel_id().map(String::from),
            is_opened: raw.is_open(),
            channel_id: raw.channel_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn channel_from_lcd() {
        let raw: IdentifiedChannel = serde_json::from_value(json!({
            "state": "STATE_CLOSED",
            "counterparty": { "port_id": "transfer", "channel_id": "channel-3" },
            "connection_hops": ["connection-12"],
            "port_id": "transfer",
            "channel_id": "channel-8"
        }))
        .unwrap();

        let channel = Channel::from(raw);

        assert_eq!(
            channel,
            Channel::new("channel-8", "connection-12", Some("channel-3"), false)
        );
    }

    #[test]
    fn pending_channel_matches_blank_stored_counterparty() {
        let stored: Channel = serde_json::from_value(json!({
            "channel_id": "channel-7",
            "connection_id": "connection-2",
            "counterparty_channel_id": "",
            "is_opened": false
        }))
        .unwrap();
        let remote: IdentifiedChannel = serde_json::from_value(json!({
            "state": "STATE_INIT",
            "counterparty": { "port_id": "transfer", "channel_id": "" },
            "connection_hops": ["connection-2"],
            "port_id": "transfer",
            "channel_id": "channel-7"
        }))
        .unwrap();

        let result = crate::reconcile::diff(&[stored], &[Channel::from(remote)]);

        assert!(result.is_empty());
    }

    #[test]
    fn client_without_chain_id() {
        let raw: IdentifiedClientState = serde_json::from_value(json!({
            "client_id": "06-solomachine-0",
            "client_state": { "@type": "/ibc.lightclients.solomachine.v2.ClientState" }
        }))
        .unwrap();

        assert_eq!(Client::from(raw), Client::new("06-solomachine-0", ""));
    }

    #[test]
    fn connection_from_lcd() {
        let raw: IdentifiedConnection = serde_json::from_value(json!({
            "id": "connection-1",
            "client_id": "07-tendermint-1",
            "state": "STATE_OPEN"
        }))
        .unwrap();

        assert_eq!(
            Connection::from(raw),
            Connection::new("connection-1", "07-tendermint-1")
        );
    }
}
