// LCD API response types
//
// Models for the IBC core query endpoints exposed by the Cosmos SDK REST
// gateway. Fields use `#[serde(default)]` liberally because node versions
// disagree on which optional fields are emitted.

use serde::{Deserialize, Serialize};

// ── Pagination ───────────────────────────────────────────────────────

/// Pagination block returned alongside every list response.
///
/// `next_key` is base64 and opaque; it is handed back verbatim as the
/// `pagination.key` query parameter. A null or empty key ends the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next_key: Option<String>,
    #[serde(default)]
    pub total: Option<String>,
}

impl Pagination {
    /// The key to request the following page with, if any.
    pub fn next(&self) -> Option<&str> {
        self.next_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// A list response that can be walked page by page.
pub trait Paged: serde::de::DeserializeOwned {
    type Item;

    /// Split the page into its items and the pagination block.
    fn into_parts(self) -> (Vec<Self::Item>, Option<Pagination>);
}

// ── Error body ───────────────────────────────────────────────────────

/// gRPC-gateway error shape: `{"code": 5, "message": "...", "details": []}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

// ── Clients ──────────────────────────────────────────────────────────

/// `GET /ibc/core/client/v1/client_states`
#[derive(Debug, Deserialize)]
pub struct ClientStatesResponse {
    #[serde(default)]
    pub client_states: Vec<IdentifiedClientState>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl Paged for ClientStatesResponse {
    type Item = IdentifiedClientState;

    fn into_parts(self) -> (Vec<Self::Item>, Option<Pagination>) {
        (self.client_states, self.pagination)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedClientState {
    pub client_id: String,
    #[serde(default)]
    pub client_state: Option<ClientState>,
}

impl IdentifiedClientState {
    /// Chain id of the counterparty tracked by this light client.
    ///
    /// Only Tendermint clients carry one; solo-machine and localhost
    /// clients yield `None`.
    pub fn chain_id(&self) -> Option<&str> {
        self.client_state.as_ref()?.chain_id.as_deref()
    }
}

/// The `Any`-encoded light client state. Only the fields the checker
/// needs are modeled; everything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientState {
    #[serde(default, rename = "@type")]
    pub type_url: Option<String>,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Connections ──────────────────────────────────────────────────────

/// `GET /ibc/core/connection/v1/connections`
#[derive(Debug, Deserialize)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<IdentifiedConnection>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl Paged for ConnectionsResponse {
    type Item = IdentifiedConnection;

    fn into_parts(self) -> (Vec<Self::Item>, Option<Pagination>) {
        (self.connections, self.pagination)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedConnection {
    pub id: String,
    pub client_id: String,
    /// `STATE_INIT`, `STATE_TRYOPEN`, `STATE_OPEN`, ...
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub counterparty: Option<ConnectionCounterparty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionCounterparty {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub connection_id: Option<String>,
}

// ── Channels ─────────────────────────────────────────────────────────

/// `GET /ibc/core/channel/v1/channels`
#[derive(Debug, Deserialize)]
pub struct ChannelsResponse {
    #[serde(default)]
    pub channels: Vec<IdentifiedChannel>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl Paged for ChannelsResponse {
    type Item = IdentifiedChannel;

    fn into_parts(self) -> (Vec<Self::Item>, Option<Pagination>) {
        (self.channels, self.pagination)
    }
}

pub const STATE_OPEN: &str = "STATE_OPEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedChannel {
    pub channel_id: String,
    #[serde(default)]
    pub port_id: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub ordering: Option<String>,
    #[serde(default)]
    pub connection_hops: Vec<String>,
    #[serde(default)]
    pub counterparty: Option<ChannelCounterparty>,
    #[serde(default)]
    pub version: Option<String>,
}

impl IdentifiedChannel {
    /// First connection hop. IBC v1 channels always have exactly one.
    pub fn connection_id(&self) -> Option<&str> {
        self.connection_hops.first().map(String::as_str)
    }

    /// Counterparty channel id; the node reports `""` while the handshake
    /// has not reached the other side yet.
    pub fn counterparty_channel_id(&self) -> Option<&str> {
        self.counterparty
            .as_ref()?
            .channel_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    pub fn is_open(&self) -> bool {
        self.state == STATE_OPEN
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelCounterparty {
    #[serde(default)]
    pub port_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}
