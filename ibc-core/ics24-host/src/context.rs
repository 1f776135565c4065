use ibc_handshake_channel_types::channel::ChannelEnd;
use ibc_handshake_channel_types::error::ChannelError;
use ibc_handshake_client_context::prelude::*;
use ibc_handshake_client_types::Height;
use ibc_handshake_commitment_types::commitment::CommitmentPrefix;
use ibc_handshake_connection_types::error::ConnectionError;
use ibc_handshake_connection_types::ConnectionEnd;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::IbcEvent;
use ibc_handshake_host_types::error::HostError;
use ibc_handshake_host_types::identifiers::{ConnectionId, Sequence};
use ibc_handshake_host_types::path::{ChannelEndPath, ConnectionPath, SeqRecvPath, SeqSendPath};
use ibc_handshake_primitives::prelude::*;

/// Context to be implemented by the host that provides all "read-only" methods.
///
/// Trait used for the top-level `validate` entrypoint in the `ibc-handshake-core` crate.
pub trait ValidationContext {
    type V: ClientValidationContext;

    /// Retrieve the context that implements all clients' `ValidationContext`.
    fn get_client_validation_context(&self) -> &Self::V;

    /// Returns the current height of the local chain.
    fn host_height(&self) -> Result<Height, HostError>;

    /// Returns the prefix that the local chain uses in the KV store.
    fn commitment_prefix(&self) -> CommitmentPrefix;

    /// Looks up the connection end stored under `conn_id`, if any.
    fn query_connection_end(&self, conn_id: &ConnectionId)
        -> Result<Option<ConnectionEnd>, HostError>;

    /// Returns the ConnectionEnd for the given identifier `conn_id`.
    fn connection_end(&self, conn_id: &ConnectionId) -> Result<ConnectionEnd, HandlerError> {
        self.query_connection_end(conn_id)?.ok_or_else(|| {
            ConnectionError::ConnectionNotFound {
                connection_id: conn_id.clone(),
            }
            .into()
        })
    }

    /// Returns `true` iff a connection is stored under `conn_id` and it is open.
    fn connection_available(&self, conn_id: &ConnectionId) -> Result<bool, HandlerError> {
        Ok(self
            .query_connection_end(conn_id)?
            .is_some_and(|conn_end| conn_end.is_open()))
    }

    /// Looks up the channel end stored under `channel_end_path`, if any.
    fn query_channel_end(
        &self,
        channel_end_path: &ChannelEndPath,
    ) -> Result<Option<ChannelEnd>, HostError>;

    /// Returns the `ChannelEnd` for the given `port_id` and `chan_id`.
    fn channel_end(&self, channel_end_path: &ChannelEndPath) -> Result<ChannelEnd, HandlerError> {
        self.query_channel_end(channel_end_path)?.ok_or_else(|| {
            ChannelError::ChannelNotFound {
                port_id: channel_end_path.0.clone(),
                channel_id: channel_end_path.1.clone(),
            }
            .into()
        })
    }

    /// Returns `true` iff a channel is stored under `channel_end_path` and it is open.
    fn channel_available(&self, channel_end_path: &ChannelEndPath) -> Result<bool, HandlerError> {
        Ok(self
            .query_channel_end(channel_end_path)?
            .is_some_and(|chan_end| chan_end.is_open()))
    }

    /// Looks up the send counter stored under `seq_send_path`, if any.
    fn query_next_sequence_send(
        &self,
        seq_send_path: &SeqSendPath,
    ) -> Result<Option<Sequence>, HostError>;

    /// Looks up the receive counter stored under `seq_recv_path`, if any.
    fn query_next_sequence_recv(
        &self,
        seq_recv_path: &SeqRecvPath,
    ) -> Result<Option<Sequence>, HostError>;

    /// Returns the sequence number for the next outgoing unit of data on a channel
    fn get_next_sequence_send(
        &self,
        seq_send_path: &SeqSendPath,
    ) -> Result<Sequence, HandlerError> {
        Ok(self
            .query_next_sequence_send(seq_send_path)?
            .ok_or_else(|| HostError::missing_data(format!("{seq_send_path}")))?)
    }

    /// Returns the receive high-water mark of a channel
    fn get_next_sequence_recv(
        &self,
        seq_recv_path: &SeqRecvPath,
    ) -> Result<Sequence, HandlerError> {
        Ok(self
            .query_next_sequence_recv(seq_recv_path)?
            .ok_or_else(|| HostError::missing_data(format!("{seq_recv_path}")))?)
    }
}

/// Context to be implemented by the host that provides all "write-only" methods.
///
/// Trait used for the top-level `execute` and `dispatch` entrypoints in the
/// `ibc-handshake-core` crate.
pub trait ExecutionContext: ValidationContext {
    type E: ClientExecutionContext;

    /// Retrieve the context that implements all clients' `ExecutionContext`.
    fn get_client_execution_context(&mut self) -> &mut Self::E;

    /// Stores the given connection_end at path
    fn store_connection(
        &mut self,
        connection_path: &ConnectionPath,
        connection_end: ConnectionEnd,
    ) -> Result<(), HandlerError>;

    /// Stores the given channel_end at a path associated with the port_id and channel_id.
    fn store_channel(
        &mut self,
        channel_end_path: &ChannelEndPath,
        channel_end: ChannelEnd,
    ) -> Result<(), HandlerError>;

    /// Stores the given `nextSequenceSend` number at the given store path
    fn store_next_sequence_send(
        &mut self,
        seq_send_path: &SeqSendPath,
        seq: Sequence,
    ) -> Result<(), HandlerError>;

    /// Stores the given `nextSequenceRecv` number at the given store path
    fn store_next_sequence_recv(
        &mut self,
        seq_recv_path: &SeqRecvPath,
        seq: Sequence,
    ) -> Result<(), HandlerError>;

    /// Emit the given IBC event
    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), HandlerError>;

    /// Log the given message.
    fn log_message(&mut self, message: String) -> Result<(), HandlerError>;
}

/// Convenient type alias for `ClientStateRef`, providing access to client
/// validation methods within the context.
pub type ClientStateRef<Ctx> =
    <<Ctx as ValidationContext>::V as ClientValidationContext>::ClientStateRef;

/// Convenient type alias for `ClientStateMut`, providing access to client
/// execution methods within the context.
pub type ClientStateMut<Ctx> =
    <<Ctx as ExecutionContext>::E as ClientExecutionContext>::ClientStateMut;

/// Convenient type alias for `ConsensusStateRef`, providing access to client
/// validation methods within the context.
pub type ConsensusStateRef<Ctx> =
    <<Ctx as ValidationContext>::V as ClientValidationContext>::ConsensusStateRef;
