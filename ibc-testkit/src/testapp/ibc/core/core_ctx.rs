//! Implementation of the host validation and execution contexts for the mock
//! chain.

use ibc_handshake_core::channel::types::channel::ChannelEnd;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::commitment_types::commitment::CommitmentPrefix;
use ibc_handshake_core::connection::types::ConnectionEnd;
use ibc_handshake_core::handler::types::error::HandlerError;
use ibc_handshake_core::handler::types::events::IbcEvent;
use ibc_handshake_core::host::types::error::HostError;
use ibc_handshake_core::host::types::identifiers::{ConnectionId, Sequence};
use ibc_handshake_core::host::types::path::{
    ChannelEndPath, ConnectionPath, SeqRecvPath, SeqSendPath,
};
use ibc_handshake_core::host::{ExecutionContext, ValidationContext};
use ibc_handshake_core::primitives::prelude::*;
use tracing::trace;

use crate::testapp::ibc::core::types::MockContext;

impl ValidationContext for MockContext {
    type V = Self;

    fn get_client_validation_context(&self) -> &Self::V {
        self
    }

    fn host_height(&self) -> Result<Height, HostError> {
        Ok(self.latest_height())
    }

    fn commitment_prefix(&self) -> CommitmentPrefix {
        self.commitment_prefix.clone()
    }

    fn query_connection_end(
        &self,
        conn_id: &ConnectionId,
    ) -> Result<Option<ConnectionEnd>, HostError> {
        self.read(ConnectionPath::new(conn_id))
    }

    fn query_channel_end(
        &self,
        channel_end_path: &ChannelEndPath,
    ) -> Result<Option<ChannelEnd>, HostError> {
        self.read(channel_end_path.clone())
    }

    fn query_next_sequence_send(
        &self,
        seq_send_path: &SeqSendPath,
    ) -> Result<Option<Sequence>, HostError> {
        self.read(seq_send_path.clone())
    }

    fn query_next_sequence_recv(
        &self,
        seq_recv_path: &SeqRecvPath,
    ) -> Result<Option<Sequence>, HostError> {
        self.read(seq_recv_path.clone())
    }
}

impl ExecutionContext for MockContext {
    type E = Self;

    fn get_client_execution_context(&mut self) -> &mut Self::E {
        self
    }

    fn store_connection(
        &mut self,
        connection_path: &ConnectionPath,
        connection_end: ConnectionEnd,
    ) -> Result<(), HandlerError> {
        trace!(
            chain = %self.chain_name,
            %connection_path,
            state = %connection_end.state(),
            "store connection"
        );
        self.write(connection_path.clone(), &connection_end);
        self.ibc_store
            .connection_ids
            .insert(connection_path.0.clone());
        Ok(())
    }

    fn store_channel(
        &mut self,
        channel_end_path: &ChannelEndPath,
        channel_end: ChannelEnd,
    ) -> Result<(), HandlerError> {
        trace!(
            chain = %self.chain_name,
            %channel_end_path,
            state = %channel_end.state(),
            "store channel"
        );
        self.write(channel_end_path.clone(), &channel_end);
        self.ibc_store
            .channel_ids
            .insert((channel_end_path.0.clone(), channel_end_path.1.clone()));
        Ok(())
    }

    fn store_next_sequence_send(
        &mut self,
        seq_send_path: &SeqSendPath,
        seq: Sequence,
    ) -> Result<(), HandlerError> {
        self.write(seq_send_path.clone(), &seq);
        Ok(())
    }

    fn store_next_sequence_recv(
        &mut self,
        seq_recv_path: &SeqRecvPath,
        seq: Sequence,
    ) -> Result<(), HandlerError> {
        self.write(seq_recv_path.clone(), &seq);
        Ok(())
    }

    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), HandlerError> {
        self.ibc_store.events.push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), HandlerError> {
        self.ibc_store.logs.push(message);
        Ok(())
    }
}
