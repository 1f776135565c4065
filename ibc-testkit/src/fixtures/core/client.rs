use ibc_handshake_core::client::types::msgs::{MsgCreateClient, MsgUpdateClient};
use ibc_handshake_core::host::types::identifiers::ClientId;

use crate::testapp::ibc::clients::mock::client_state::MockClientState;
use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::clients::mock::header::MockHeader;

/// Returns a `MsgCreateClient` registering a mock client trusting `header`.
pub fn dummy_msg_create_client(client_id: ClientId, header: MockHeader) -> MsgCreateClient {
    MsgCreateClient::new(
        client_id,
        MockClientState::new(header.height()).into(),
        MockConsensusState::from(header).into(),
    )
}

/// Returns a `MsgUpdateClient` advancing a mock client to `header`.
pub fn dummy_msg_update_client(client_id: ClientId, header: MockHeader) -> MsgUpdateClient {
    MsgUpdateClient {
        client_id,
        client_message: header.into(),
    }
}
