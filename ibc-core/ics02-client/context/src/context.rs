use ibc_handshake_client_types::error::ClientError;
use ibc_handshake_host_types::identifiers::ClientId;
use ibc_handshake_host_types::path::{ClientConsensusStatePath, ClientStatePath};

use crate::client_state::{ClientStateExecution, ClientStateValidation};
use crate::consensus_state::ConsensusState;

/// Defines the methods available to clients for validating client state
/// transitions. The generic `V` parameter in
/// [crate::client_state::ClientStateValidation] must
/// inherit from this trait.
pub trait ClientValidationContext: Sized {
    type ClientStateRef: ClientStateValidation<Self>;
    type ConsensusStateRef: ConsensusState;

    /// Returns the ClientState for the given identifier `client_id`.
    ///
    /// Returns `ClientError::ClientNotFound` if no such client exists.
    fn client_state(&self, client_id: &ClientId) -> Result<Self::ClientStateRef, ClientError>;

    /// Retrieve the consensus state for the given client ID at the specified
    /// height.
    ///
    /// Returns `ClientError::ConsensusStateNotFound` if no such state exists.
    fn consensus_state(
        &self,
        client_cons_state_path: &ClientConsensusStatePath,
    ) -> Result<Self::ConsensusStateRef, ClientError>;

    /// Returns `true` if a client is registered under `client_id`.
    fn client_exists(&self, client_id: &ClientId) -> bool {
        self.client_state(client_id).is_ok()
    }
}

/// Defines the methods that all client `ExecutionContext`s (precisely the
/// generic parameter of
/// [`crate::client_state::ClientStateExecution`] ) must
/// implement.
///
/// Specifically, clients have the responsibility to store their client state
/// and consensus states. This trait defines a uniform interface to do that for
/// all clients.
pub trait ClientExecutionContext:
    ClientValidationContext<ClientStateRef = Self::ClientStateMut>
{
    type ClientStateMut: ClientStateExecution<Self>;

    fn client_state_mut(&self, client_id: &ClientId) -> Result<Self::ClientStateMut, ClientError> {
        self.client_state(client_id)
    }

    /// Called upon successful client creation and update
    fn store_client_state(
        &mut self,
        client_state_path: ClientStatePath,
        client_state: Self::ClientStateRef,
    ) -> Result<(), ClientError>;

    /// Called upon successful client creation and update
    fn store_consensus_state(
        &mut self,
        consensus_state_path: ClientConsensusStatePath,
        consensus_state: Self::ConsensusStateRef,
    ) -> Result<(), ClientError>;
}

/// General-purpose helper converter enabling `TryFrom` and `Into` conversions
/// primarily intended between a concrete client type and its `Any` envelope.
pub trait Convertible<C>: TryFrom<C> + Into<C> {}

impl<T, C> Convertible<C> for T where T: TryFrom<C> + Into<C> {}
