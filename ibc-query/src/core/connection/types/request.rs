//! Request types of the connection queries.

use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::host::types::identifiers::ConnectionId;

use crate::types::StoreLocation;

/// Defines the request type for querying a connection.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConnectionRequest {
    pub location: StoreLocation,
    pub connection_id: ConnectionId,
    /// Attach a commitment proof to the returned record.
    pub prove: bool,
    /// Height to take proofs at; the latest committed height if unset.
    pub query_height: Option<Height>,
}

impl QueryConnectionRequest {
    pub fn new(location: StoreLocation, connection_id: ConnectionId) -> Self {
        Self {
            location,
            connection_id,
            prove: false,
            query_height: None,
        }
    }

    pub fn with_proof(self) -> Self {
        Self {
            prove: true,
            ..self
        }
    }
}

/// Defines the request type for querying all the existing connections.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConnectionsRequest {
    pub location: StoreLocation,
}
