use ibc_handshake_client_types::TimeoutHeight;
use ibc_handshake_host_types::identifiers::{ClientId, ConnectionId};

use crate::connection::Counterparty;

/// Per our convention, this message is sent to chain A.
/// The handler creates the connection end in `Init` state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionOpenInit {
    /// Identifier under which chain A stores the connection
    pub conn_id_on_a: ConnectionId,
    /// ClientId on chain A tracking chain B
    pub client_id_on_a: ClientId,
    /// ClientId, ConnectionId and prefix of chain B
    pub counterparty: Counterparty,
    /// Height of chain B past which chain B must not process `OpenTry`
    pub next_timeout_height: TimeoutHeight,
}
