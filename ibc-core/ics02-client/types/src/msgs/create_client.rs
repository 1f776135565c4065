//! Definition of domain type message `MsgCreateClient`.

use ibc_handshake_host_types::identifiers::ClientId;
use ibc_handshake_primitives::Any;

/// A type of message that triggers the creation of a new on-chain (IBC) client.
///
/// The identifier is chosen by the submitter and must not be in use on the
/// local chain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgCreateClient {
    pub client_id: ClientId,
    pub client_state: Any,
    pub consensus_state: Any,
}

impl MsgCreateClient {
    pub fn new(client_id: ClientId, client_state: Any, consensus_state: Any) -> Self {
        MsgCreateClient {
            client_id,
            client_state,
            consensus_state,
        }
    }
}
