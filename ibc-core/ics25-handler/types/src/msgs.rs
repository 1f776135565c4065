use ibc_handshake_channel_types::msgs::ChannelMsg;
use ibc_handshake_client_types::msgs::ClientMsg;
use ibc_handshake_connection_types::msgs::ConnectionMsg;

/// Enumeration of all messages the handshake core is capable of routing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum MsgEnvelope {
    Client(ClientMsg),
    Connection(ConnectionMsg),
    Channel(ChannelMsg),
}
