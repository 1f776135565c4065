//! Request types of the channel queries.

use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::host::types::identifiers::{ChannelId, PortId};

use crate::types::StoreLocation;

/// Defines the request type for querying a channel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryChannelRequest {
    pub location: StoreLocation,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    /// Attach commitment proofs to the returned record and counters.
    pub prove: bool,
    /// Height to take proofs at; the latest committed height if unset.
    pub query_height: Option<Height>,
}

impl QueryChannelRequest {
    pub fn new(location: StoreLocation, port_id: PortId, channel_id: ChannelId) -> Self {
        Self {
            location,
            port_id,
            channel_id,
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

/// Defines the request type for querying all the existing channels.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryChannelsRequest {
    pub location: StoreLocation,
}

/// Defines the request type for querying the next send sequence of a channel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryNextSequenceSendRequest {
    pub location: StoreLocation,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub prove: bool,
    pub query_height: Option<Height>,
}

/// Defines the request type for querying the next receive sequence of a channel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryNextSequenceRecvRequest {
    pub location: StoreLocation,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub prove: bool,
    pub query_height: Option<Height>,
}
