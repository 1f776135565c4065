//! Events emitted by the client registry handlers.

use ibc_handshake_host_types::identifiers::ClientId;

use crate::height::Height;

/// Client event types
pub const CREATE_CLIENT_EVENT: &str = "create_client";
pub const UPDATE_CLIENT_EVENT: &str = "update_client";

/// CreateClient event signals the creation of a new on-chain client (IBC client).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateClient {
    client_id: ClientId,
    consensus_height: Height,
}

impl CreateClient {
    pub fn new(client_id: ClientId, consensus_height: Height) -> Self {
        Self {
            client_id,
            consensus_height,
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn consensus_height(&self) -> &Height {
        &self.consensus_height
    }

    pub fn event_type(&self) -> &str {
        CREATE_CLIENT_EVENT
    }
}

/// UpdateClient event signals a recent update of an on-chain client (IBC Client).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateClient {
    client_id: ClientId,
    consensus_height: Height,
}

impl UpdateClient {
    pub fn new(client_id: ClientId, consensus_height: Height) -> Self {
        Self {
            client_id,
            consensus_height,
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn consensus_height(&self) -> &Height {
        &self.consensus_height
    }

    pub fn event_type(&self) -> &str {
        UPDATE_CLIENT_EVENT
    }
}
