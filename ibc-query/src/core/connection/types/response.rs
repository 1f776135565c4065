//! Response types of the connection queries.

use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::connection::types::{ConnectionEnd, IdentifiedConnectionEnd};
use ibc_handshake_core::primitives::prelude::*;

use crate::types::ProvedValue;

/// Defines the response type when querying a connection.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConnectionResponse {
    pub connection: ProvedValue<ConnectionEnd>,
    /// Whether the connection is open and usable by channels.
    pub available: bool,
    pub proof_height: Height,
}

impl QueryConnectionResponse {
    pub fn new(connection: ProvedValue<ConnectionEnd>, proof_height: Height) -> Self {
        let available = connection.value.is_open();

        Self {
            connection,
            available,
            proof_height,
        }
    }
}

/// Defines the response type when querying all the existing connections.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConnectionsResponse {
    pub connections: Vec<IdentifiedConnectionEnd>,
    pub query_height: Height,
}

impl QueryConnectionsResponse {
    pub fn new(connections: Vec<IdentifiedConnectionEnd>, query_height: Height) -> Self {
        Self {
            connections,
            query_height,
        }
    }
}
