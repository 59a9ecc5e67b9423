// LCD API IBC core endpoints
//
// All three listings are chain-wide (no port or client scoping) and are
// walked to the last page before returning.

use tracing::debug;

use crate::error::Error;
use crate::lcd::client::LcdClient;
use crate::lcd::models::{
    ChannelsResponse, ClientStatesResponse, ConnectionsResponse, IdentifiedChannel,
    IdentifiedClientState, IdentifiedConnection,
};

impl LcdClient {
    /// List every light client known to the node.
    ///
    /// `GET /ibc/core/client/v1/client_states`
    pub async fn list_client_states(&self) -> Result<Vec<IdentifiedClientState>, Error> {
        debug!("listing client states");
        self.get_all::<ClientStatesResponse>("ibc/core/client/v1/client_states")
            .await
    }

    /// List every connection end.
    ///
    /// `GET /ibc/core/connection/v1/connections`
    pub async fn list_connections(&self) -> Result<Vec<IdentifiedConnection>, Error> {
        debug!("listing connections");
        self.get_all::<ConnectionsResponse>("ibc/core/connection/v1/connections")
            .await
    }

    /// List every channel end across all ports.
    ///
    /// `GET /ibc/core/channel/v1/channels`
    pub async fn list_channels(&self) -> Result<Vec<IdentifiedChannel>, Error> {
        debug!("listing channels");
        self.get_all::<ChannelsResponse>("ibc/core/channel/v1/channels")
            .await
    }
}
