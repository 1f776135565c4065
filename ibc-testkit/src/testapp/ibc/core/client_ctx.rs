use ibc_handshake_core::client::context::{ClientExecutionContext, ClientValidationContext};
use ibc_handshake_core::client::types::error::ClientError;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::host::types::identifiers::ClientId;
use ibc_handshake_core::host::types::path::{ClientConsensusStatePath, ClientStatePath};
use ibc_handshake_core::primitives::prelude::*;
use ibc_handshake_core::primitives::Any;
use tracing::trace;

use crate::testapp::ibc::clients::mock::client_state::MockClientState;
use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::core::types::MockContext;

impl ClientValidationContext for MockContext {
    type ClientStateRef = MockClientState;
    type ConsensusStateRef = MockConsensusState;

    fn client_state(&self, client_id: &ClientId) -> Result<Self::ClientStateRef, ClientError> {
        let any: Any = self
            .read(ClientStatePath::new(client_id.clone()))
            .map_err(|e| ClientError::Other {
                description: e.to_string(),
            })?
            .ok_or_else(|| ClientError::ClientNotFound {
                client_id: client_id.clone(),
            })?;

        any.try_into()
    }

    fn consensus_state(
        &self,
        client_cons_state_path: &ClientConsensusStatePath,
    ) -> Result<Self::ConsensusStateRef, ClientError> {
        let any: Any = self
            .read(client_cons_state_path.clone())
            .map_err(|e| ClientError::Other {
                description: e.to_string(),
            })?
            .ok_or_else(|| ClientError::ConsensusStateNotFound {
                client_id: client_cons_state_path.client_id.clone(),
                height: Height::new(
                    client_cons_state_path.revision_number,
                    client_cons_state_path.revision_height,
                )
                .unwrap_or_else(|_| Height::min(client_cons_state_path.revision_number)),
            })?;

        any.try_into()
    }
}

impl ClientExecutionContext for MockContext {
    type ClientStateMut = MockClientState;

    fn store_client_state(
        &mut self,
        client_state_path: ClientStatePath,
        client_state: Self::ClientStateRef,
    ) -> Result<(), ClientError> {
        trace!(
            chain = %self.chain_name,
            %client_state_path,
            latest_height = %client_state.latest_height,
            "store client state"
        );
        self.write(client_state_path, &Any::from(client_state));
        Ok(())
    }

    fn store_consensus_state(
        &mut self,
        consensus_state_path: ClientConsensusStatePath,
        consensus_state: Self::ConsensusStateRef,
    ) -> Result<(), ClientError> {
        trace!(chain = %self.chain_name, %consensus_state_path, "store consensus state");
        self.write(consensus_state_path, &Any::from(consensus_state));
        Ok(())
    }
}
