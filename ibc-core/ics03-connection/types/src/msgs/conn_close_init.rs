use ibc_handshake_host_types::identifiers::ConnectionId;

/// First step in closing a connection, sent to the chain that initiates the close.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionCloseInit {
    pub conn_id_on_a: ConnectionId,
}
