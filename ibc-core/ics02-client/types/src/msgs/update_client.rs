//! Definition of domain type message `MsgUpdateClient`.

use ibc_handshake_host_types::identifiers::ClientId;
use ibc_handshake_primitives::Any;

/// Represents the message that triggers the update of an on-chain (IBC) client
/// with a new header.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgUpdateClient {
    pub client_id: ClientId,
    pub client_message: Any,
}
