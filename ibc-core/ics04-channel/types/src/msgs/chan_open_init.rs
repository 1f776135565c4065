use ibc_handshake_client_types::TimeoutHeight;
use ibc_handshake_host_types::identifiers::{ChannelId, ConnectionId, PortId};

use crate::channel::Order;

///
/// Message definition for the first step in the channel open handshake (`ChanOpenInit` datagram).
/// Per our convention, this message is sent to chain A.
///
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgChannelOpenInit {
    pub port_id_on_a: PortId,
    pub chan_id_on_a: ChannelId,
    pub connection_id_on_a: ConnectionId,
    pub port_id_on_b: PortId,
    pub chan_id_on_b: ChannelId,
    pub ordering: Order,
    /// Height of chain B past which chain B must not process `ChanOpenTry`
    pub next_timeout_height: TimeoutHeight,
}
