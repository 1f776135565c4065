use ibc_handshake_core::channel::types::channel::Order;
use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::host::types::identifiers::{ChannelId, ClientId, ConnectionId, PortId};

use crate::relayer::error::RelayerError;
use crate::relayer::utils::RelayerOps;
use crate::testapp::ibc::core::types::MockContext;

/// A relayer between two mock chains, A and B.
pub struct RelayerContext {
    ctx_a: MockContext,
    ctx_b: MockContext,
}

impl RelayerContext {
    pub fn new(ctx_a: MockContext, ctx_b: MockContext) -> Self {
        Self { ctx_a, ctx_b }
    }

    pub fn get_ctx_a(&self) -> &MockContext {
        &self.ctx_a
    }

    pub fn get_ctx_b(&self) -> &MockContext {
        &self.ctx_b
    }

    pub fn get_ctx_a_mut(&mut self) -> &mut MockContext {
        &mut self.ctx_a
    }

    pub fn get_ctx_b_mut(&mut self) -> &mut MockContext {
        &mut self.ctx_b
    }

    pub fn into_inner(self) -> (MockContext, MockContext) {
        (self.ctx_a, self.ctx_b)
    }

    pub fn create_client_on_a(&mut self, client_id_on_a: ClientId) -> Result<(), RelayerError> {
        RelayerOps::create_client_on_a(&mut self.ctx_a, &self.ctx_b, client_id_on_a)
    }

    pub fn create_client_on_b(&mut self, client_id_on_b: ClientId) -> Result<(), RelayerError> {
        RelayerOps::create_client_on_a(&mut self.ctx_b, &self.ctx_a, client_id_on_b)
    }

    pub fn update_client_on_a_with_sync(
        &mut self,
        client_id_on_a: &ClientId,
    ) -> Result<Height, RelayerError> {
        RelayerOps::update_client_on_a_with_sync(&mut self.ctx_a, &self.ctx_b, client_id_on_a)
    }

    pub fn update_client_on_b_with_sync(
        &mut self,
        client_id_on_b: &ClientId,
    ) -> Result<Height, RelayerError> {
        RelayerOps::update_client_on_a_with_sync(&mut self.ctx_b, &self.ctx_a, client_id_on_b)
    }

    pub fn connection_open_init_on_a(
        &mut self,
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::connection_open_init_on_a(
            &mut self.ctx_a,
            &self.ctx_b,
            conn_id_on_a,
            client_id_on_a,
            conn_id_on_b,
            client_id_on_b,
            next_timeout_height,
        )
    }

    pub fn connection_open_try_on_b(
        &mut self,
        conn_id_on_b: ConnectionId,
        conn_id_on_a: ConnectionId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::connection_open_try_on_b(
            &mut self.ctx_b,
            &self.ctx_a,
            conn_id_on_b,
            conn_id_on_a,
            next_timeout_height,
        )
    }

    pub fn connection_open_ack_on_a(
        &mut self,
        conn_id_on_a: ConnectionId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::connection_open_ack_on_a(
            &mut self.ctx_a,
            &self.ctx_b,
            conn_id_on_a,
            next_timeout_height,
        )
    }

    pub fn connection_open_confirm_on_b(
        &mut self,
        conn_id_on_b: ConnectionId,
    ) -> Result<(), RelayerError> {
        RelayerOps::connection_open_confirm_on_b(&mut self.ctx_b, &self.ctx_a, conn_id_on_b)
    }

    pub fn connection_open_timeout_on_a(
        &mut self,
        conn_id_on_a: ConnectionId,
    ) -> Result<(), RelayerError> {
        RelayerOps::connection_open_timeout_on_a(&mut self.ctx_a, &self.ctx_b, conn_id_on_a)
    }

    pub fn connection_close_init_on_a(
        &mut self,
        conn_id_on_a: ConnectionId,
    ) -> Result<(), RelayerError> {
        RelayerOps::connection_close_init_on_a(&mut self.ctx_a, conn_id_on_a)
    }

    pub fn connection_close_confirm_on_b(
        &mut self,
        conn_id_on_b: ConnectionId,
    ) -> Result<(), RelayerError> {
        RelayerOps::connection_close_confirm_on_b(&mut self.ctx_b, &self.ctx_a, conn_id_on_b)
    }

    /// Opens a connection between `conn_id_on_a` and `conn_id_on_b`, with
    /// the handshake started on chain A.
    pub fn create_connection_on_a(
        &mut self,
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
        timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::create_connection_on_a(
            &mut self.ctx_a,
            &mut self.ctx_b,
            conn_id_on_a,
            client_id_on_a,
            conn_id_on_b,
            client_id_on_b,
            timeout_height,
        )
    }

    /// Opens a connection between `conn_id_on_b` and `conn_id_on_a`, with
    /// the handshake started on chain B.
    pub fn create_connection_on_b(
        &mut self,
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::create_connection_on_a(
            &mut self.ctx_b,
            &mut self.ctx_a,
            conn_id_on_b,
            client_id_on_b,
            conn_id_on_a,
            client_id_on_a,
            timeout_height,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn channel_open_init_on_a(
        &mut self,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        conn_id_on_a: ConnectionId,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
        ordering: Order,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::channel_open_init_on_a(
            &mut self.ctx_a,
            port_id_on_a,
            chan_id_on_a,
            conn_id_on_a,
            port_id_on_b,
            chan_id_on_b,
            ordering,
            next_timeout_height,
        )
    }

    pub fn channel_open_try_on_b(
        &mut self,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
        conn_id_on_b: ConnectionId,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::channel_open_try_on_b(
            &mut self.ctx_b,
            &self.ctx_a,
            port_id_on_b,
            chan_id_on_b,
            conn_id_on_b,
            port_id_on_a,
            chan_id_on_a,
            next_timeout_height,
        )
    }

    pub fn channel_open_ack_on_a(
        &mut self,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::channel_open_ack_on_a(
            &mut self.ctx_a,
            &self.ctx_b,
            port_id_on_a,
            chan_id_on_a,
            next_timeout_height,
        )
    }

    pub fn channel_open_confirm_on_b(
        &mut self,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
    ) -> Result<(), RelayerError> {
        RelayerOps::channel_open_confirm_on_b(
            &mut self.ctx_b,
            &self.ctx_a,
            port_id_on_b,
            chan_id_on_b,
        )
    }

    pub fn channel_open_timeout_on_a(
        &mut self,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
    ) -> Result<(), RelayerError> {
        RelayerOps::channel_open_timeout_on_a(
            &mut self.ctx_a,
            &self.ctx_b,
            port_id_on_a,
            chan_id_on_a,
        )
    }

    pub fn channel_close_init_on_a(
        &mut self,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
    ) -> Result<(), RelayerError> {
        RelayerOps::channel_close_init_on_a(&mut self.ctx_a, port_id_on_a, chan_id_on_a)
    }

    pub fn channel_close_confirm_on_b(
        &mut self,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
    ) -> Result<(), RelayerError> {
        RelayerOps::channel_close_confirm_on_b(
            &mut self.ctx_b,
            &self.ctx_a,
            port_id_on_b,
            chan_id_on_b,
        )
    }

    /// Opens a channel between `(port_id_on_a, chan_id_on_a)` and
    /// `(port_id_on_b, chan_id_on_b)` over an open connection, with the
    /// handshake started on chain A.
    #[allow(clippy::too_many_arguments)]
    pub fn create_channel_on_a(
        &mut self,
        conn_id_on_a: ConnectionId,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        conn_id_on_b: ConnectionId,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
        ordering: Order,
        timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        RelayerOps::create_channel_on_a(
            &mut self.ctx_a,
            &mut self.ctx_b,
            conn_id_on_a,
            port_id_on_a,
            chan_id_on_a,
            conn_id_on_b,
            port_id_on_b,
            chan_id_on_b,
            ordering,
            timeout_height,
        )
    }
}
