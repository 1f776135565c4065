//! Response types of the channel queries.

use ibc_handshake_core::channel::types::channel::{ChannelEnd, IdentifiedChannelEnd};
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::host::types::identifiers::Sequence;
use ibc_handshake_core::primitives::prelude::*;

use crate::types::ProvedValue;

/// Defines the response type when querying a channel.
///
/// The sequence counters exist once the channel has opened; they are only
/// reported while the channel is available.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryChannelResponse {
    pub channel: ProvedValue<ChannelEnd>,
    pub available: bool,
    pub next_sequence_send: Option<ProvedValue<Sequence>>,
    pub next_sequence_recv: Option<ProvedValue<Sequence>>,
    pub proof_height: Height,
}

/// Defines the response type when querying all the existing channels.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryChannelsResponse {
    pub channels: Vec<IdentifiedChannelEnd>,
    pub query_height: Height,
}

impl QueryChannelsResponse {
    pub fn new(channels: Vec<IdentifiedChannelEnd>, query_height: Height) -> Self {
        Self {
            channels,
            query_height,
        }
    }
}

/// Defines the response type when querying the next send sequence of a channel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryNextSequenceSendResponse {
    pub next_sequence_send: ProvedValue<Sequence>,
    pub proof_height: Height,
}

/// Defines the response type when querying the next receive sequence of a channel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryNextSequenceRecvResponse {
    pub next_sequence_recv: ProvedValue<Sequence>,
    pub proof_height: Height,
}
