//! Relayer operations between two mock chains.
//!
//! Every operation names the chain it delivers to first. A datagram carrying
//! a proof is preceded by an update of the destination's client to the
//! latest header of the source, and the proof is taken at that height.

use core::cmp::Ordering;

use ibc_handshake_core::channel::types::channel::Order;
use ibc_handshake_core::channel::types::msgs::{
    ChannelMsg, MsgChannelCloseConfirm, MsgChannelCloseInit, MsgChannelOpenAck,
    MsgChannelOpenConfirm, MsgChannelOpenInit, MsgChannelOpenTimeout, MsgChannelOpenTry,
};
use ibc_handshake_core::client::context::ClientValidationContext;
use ibc_handshake_core::client::types::msgs::{ClientMsg, MsgCreateClient, MsgUpdateClient};
use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_core::connection::types::msgs::{
    ConnectionMsg, MsgConnectionCloseConfirm, MsgConnectionCloseInit, MsgConnectionOpenAck,
    MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTimeout,
    MsgConnectionOpenTry,
};
use ibc_handshake_core::connection::types::Counterparty;
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::identifiers::{ChannelId, ClientId, ConnectionId, PortId};
use ibc_handshake_core::host::types::path::{ChannelEndPath, ConnectionPath, Path};
use ibc_handshake_core::host::ValidationContext;
use ibc_handshake_core::primitives::prelude::*;
use tracing::info;

use crate::relayer::error::RelayerError;
use crate::testapp::ibc::clients::mock::client_state::MockClientState;
use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::core::types::MockContext;

/// Stateless relayer operations over a pair of [`MockContext`]s.
pub struct RelayerOps;

impl RelayerOps {
    /// Creates a client on `ctx_a` trusting the latest header of `ctx_b`.
    pub fn create_client_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        client_id_on_a: ClientId,
    ) -> Result<(), RelayerError> {
        let height_of_b = ctx_b.latest_height();
        let header_of_b = ctx_b
            .latest_header()
            .ok_or(RelayerError::MissingHeader {
                height: height_of_b,
            })?;

        info!(
            chain = %ctx_a.chain_name,
            client = %client_id_on_a,
            height = %height_of_b,
            "create client"
        );

        let msg = MsgCreateClient::new(
            client_id_on_a,
            MockClientState::new(header_of_b.height()).into(),
            MockConsensusState::from(header_of_b).into(),
        );

        ctx_a.deliver(MsgEnvelope::Client(ClientMsg::CreateClient(msg)))?;

        Ok(())
    }

    /// Brings the client `client_id_on_a` up to the latest height of `ctx_b`
    /// and returns that height.
    pub fn update_client_on_a_with_sync(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        client_id_on_a: &ClientId,
    ) -> Result<Height, RelayerError> {
        let client_state = ctx_a.client_state(client_id_on_a).map_err(|_| {
            RelayerError::ClientStateNotFound {
                client_id: client_id_on_a.clone(),
            }
        })?;

        let source_height = ctx_b.latest_height();
        let destination_height = client_state.latest_height;

        match destination_height.cmp(&source_height) {
            Ordering::Equal => return Ok(source_height),
            Ordering::Greater => {
                return Err(RelayerError::ClientAtHigherHeight {
                    client_id: client_id_on_a.clone(),
                    source_height,
                    destination_height,
                })
            }
            Ordering::Less => {}
        }

        let header_of_b = ctx_b
            .latest_header()
            .ok_or(RelayerError::MissingHeader {
                height: source_height,
            })?;

        info!(
            chain = %ctx_a.chain_name,
            client = %client_id_on_a,
            from = %destination_height,
            to = %source_height,
            "update client"
        );

        let msg = MsgUpdateClient {
            client_id: client_id_on_a.clone(),
            client_message: header_of_b.into(),
        };

        ctx_a.deliver(MsgEnvelope::Client(ClientMsg::UpdateClient(msg)))?;

        Ok(source_height)
    }

    /// Syncs the client of `ctx_a` tracking `ctx_b` and proves `path` on
    /// `ctx_b` at the synced height.
    fn sync_and_prove(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        client_id_on_a: &ClientId,
        path: impl Into<Path>,
    ) -> Result<(CommitmentProofBytes, Height), RelayerError> {
        let path = path.into();
        let height = Self::update_client_on_a_with_sync(ctx_a, ctx_b, client_id_on_a)?;

        let proof = ctx_b
            .prove(height, path.clone())
            .ok_or_else(|| RelayerError::MissingProof {
                path: path.to_string(),
                height,
            })?;

        Ok((proof, height))
    }

    /// Returns the client of `ctx` behind the connection `conn_id`.
    fn client_of_connection(
        ctx: &MockContext,
        conn_id: &ConnectionId,
    ) -> Result<ClientId, RelayerError> {
        Ok(ctx
            .connection_end(conn_id)
            .map_err(RelayerError::Query)?
            .client_id()
            .clone())
    }

    /// Returns the client of `ctx` behind the connection the channel runs over.
    fn client_of_channel(
        ctx: &MockContext,
        port_id: &PortId,
        chan_id: &ChannelId,
    ) -> Result<ClientId, RelayerError> {
        let chan_end = ctx
            .channel_end(&ChannelEndPath::new(port_id, chan_id))
            .map_err(RelayerError::Query)?;

        Self::client_of_connection(ctx, chan_end.connection_id())
    }

    pub fn connection_open_init_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        info!(chain = %ctx_a.chain_name, connection = %conn_id_on_a, "connection open init");

        let msg = MsgConnectionOpenInit {
            conn_id_on_a,
            client_id_on_a,
            counterparty: Counterparty::new(
                client_id_on_b,
                conn_id_on_b,
                ctx_b.commitment_prefix(),
            ),
            next_timeout_height,
        };

        ctx_a.deliver(MsgEnvelope::Connection(ConnectionMsg::OpenInit(msg)))?;

        Ok(())
    }

    pub fn connection_open_try_on_b(
        ctx_b: &mut MockContext,
        ctx_a: &MockContext,
        conn_id_on_b: ConnectionId,
        conn_id_on_a: ConnectionId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        let conn_end_on_a = ctx_a
            .connection_end(&conn_id_on_a)
            .map_err(RelayerError::Query)?;
        let client_id_on_b = conn_end_on_a.counterparty().client_id().clone();

        let (proof_conn_end_on_a, proof_height_on_a) = Self::sync_and_prove(
            ctx_b,
            ctx_a,
            &client_id_on_b,
            ConnectionPath::new(&conn_id_on_a),
        )?;

        info!(
            chain = %ctx_b.chain_name,
            connection = %conn_id_on_b,
            proof_height = %proof_height_on_a,
            "connection open try"
        );

        let msg = MsgConnectionOpenTry {
            conn_id_on_b,
            client_id_on_b,
            counterparty: Counterparty::new(
                conn_end_on_a.client_id().clone(),
                conn_id_on_a,
                ctx_a.commitment_prefix(),
            ),
            proof_conn_end_on_a,
            proof_height_on_a,
            timeout_height_on_a: *conn_end_on_a.next_timeout_height(),
            next_timeout_height,
        };

        ctx_b.deliver(MsgEnvelope::Connection(ConnectionMsg::OpenTry(msg)))?;

        Ok(())
    }

    pub fn connection_open_ack_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        conn_id_on_a: ConnectionId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        let conn_end_on_a = ctx_a
            .connection_end(&conn_id_on_a)
            .map_err(RelayerError::Query)?;
        let conn_id_on_b = conn_end_on_a.counterparty().connection_id().clone();
        let conn_end_on_b = ctx_b
            .connection_end(&conn_id_on_b)
            .map_err(RelayerError::Query)?;

        let (proof_conn_end_on_b, proof_height_on_b) = Self::sync_and_prove(
            ctx_a,
            ctx_b,
            conn_end_on_a.client_id(),
            ConnectionPath::new(&conn_id_on_b),
        )?;

        info!(
            chain = %ctx_a.chain_name,
            connection = %conn_id_on_a,
            proof_height = %proof_height_on_b,
            "connection open ack"
        );

        let msg = MsgConnectionOpenAck {
            conn_id_on_a,
            proof_conn_end_on_b,
            proof_height_on_b,
            timeout_height_on_b: *conn_end_on_b.next_timeout_height(),
            next_timeout_height,
        };

        ctx_a.deliver(MsgEnvelope::Connection(ConnectionMsg::OpenAck(msg)))?;

        Ok(())
    }

    pub fn connection_open_confirm_on_b(
        ctx_b: &mut MockContext,
        ctx_a: &MockContext,
        conn_id_on_b: ConnectionId,
    ) -> Result<(), RelayerError> {
        let conn_end_on_b = ctx_b
            .connection_end(&conn_id_on_b)
            .map_err(RelayerError::Query)?;
        let conn_id_on_a = conn_end_on_b.counterparty().connection_id().clone();
        let conn_end_on_a = ctx_a
            .connection_end(&conn_id_on_a)
            .map_err(RelayerError::Query)?;

        let (proof_conn_end_on_a, proof_height_on_a) = Self::sync_and_prove(
            ctx_b,
            ctx_a,
            conn_end_on_b.client_id(),
            ConnectionPath::new(&conn_id_on_a),
        )?;

        info!(
            chain = %ctx_b.chain_name,
            connection = %conn_id_on_b,
            proof_height = %proof_height_on_a,
            "connection open confirm"
        );

        let msg = MsgConnectionOpenConfirm {
            conn_id_on_b,
            proof_conn_end_on_a,
            proof_height_on_a,
            timeout_height_on_a: *conn_end_on_a.next_timeout_height(),
        };

        ctx_b.deliver(MsgEnvelope::Connection(ConnectionMsg::OpenConfirm(msg)))?;

        Ok(())
    }

    /// Closes the stalled connection `conn_id_on_a`, proving that `ctx_b`
    /// never stored its end.
    pub fn connection_open_timeout_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        conn_id_on_a: ConnectionId,
    ) -> Result<(), RelayerError> {
        let conn_end_on_a = ctx_a
            .connection_end(&conn_id_on_a)
            .map_err(RelayerError::Query)?;

        let (proof_unreceived_on_b, proof_height_on_b) = Self::sync_and_prove(
            ctx_a,
            ctx_b,
            conn_end_on_a.client_id(),
            ConnectionPath::new(conn_end_on_a.counterparty().connection_id()),
        )?;

        info!(
            chain = %ctx_a.chain_name,
            connection = %conn_id_on_a,
            proof_height = %proof_height_on_b,
            "connection open timeout"
        );

        let msg = MsgConnectionOpenTimeout {
            conn_id_on_a,
            proof_unreceived_on_b,
            proof_height_on_b,
        };

        ctx_a.deliver(MsgEnvelope::Connection(ConnectionMsg::OpenTimeout(msg)))?;

        Ok(())
    }

    pub fn connection_close_init_on_a(
        ctx_a: &mut MockContext,
        conn_id_on_a: ConnectionId,
    ) -> Result<(), RelayerError> {
        info!(chain = %ctx_a.chain_name, connection = %conn_id_on_a, "connection close init");

        let msg = MsgConnectionCloseInit { conn_id_on_a };

        ctx_a.deliver(MsgEnvelope::Connection(ConnectionMsg::CloseInit(msg)))?;

        Ok(())
    }

    pub fn connection_close_confirm_on_b(
        ctx_b: &mut MockContext,
        ctx_a: &MockContext,
        conn_id_on_b: ConnectionId,
    ) -> Result<(), RelayerError> {
        let conn_end_on_b = ctx_b
            .connection_end(&conn_id_on_b)
            .map_err(RelayerError::Query)?;

        let (proof_conn_end_on_a, proof_height_on_a) = Self::sync_and_prove(
            ctx_b,
            ctx_a,
            conn_end_on_b.client_id(),
            ConnectionPath::new(conn_end_on_b.counterparty().connection_id()),
        )?;

        info!(
            chain = %ctx_b.chain_name,
            connection = %conn_id_on_b,
            proof_height = %proof_height_on_a,
            "connection close confirm"
        );

        let msg = MsgConnectionCloseConfirm {
            conn_id_on_b,
            proof_conn_end_on_a,
            proof_height_on_a,
        };

        ctx_b.deliver(MsgEnvelope::Connection(ConnectionMsg::CloseConfirm(msg)))?;

        Ok(())
    }

    /// Runs the four steps of the connection handshake, started on `ctx_a`.
    pub fn create_connection_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &mut MockContext,
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
        timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        Self::connection_open_init_on_a(
            ctx_a,
            ctx_b,
            conn_id_on_a.clone(),
            client_id_on_a,
            conn_id_on_b.clone(),
            client_id_on_b,
            timeout_height,
        )?;
        Self::connection_open_try_on_b(
            ctx_b,
            ctx_a,
            conn_id_on_b.clone(),
            conn_id_on_a.clone(),
            timeout_height,
        )?;
        Self::connection_open_ack_on_a(ctx_a, ctx_b, conn_id_on_a, timeout_height)?;
        Self::connection_open_confirm_on_b(ctx_b, ctx_a, conn_id_on_b)?;

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn channel_open_init_on_a(
        ctx_a: &mut MockContext,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        conn_id_on_a: ConnectionId,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
        ordering: Order,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        info!(
            chain = %ctx_a.chain_name,
            port = %port_id_on_a,
            channel = %chan_id_on_a,
            %ordering,
            "channel open init"
        );

        let msg = MsgChannelOpenInit {
            port_id_on_a,
            chan_id_on_a,
            connection_id_on_a: conn_id_on_a,
            port_id_on_b,
            chan_id_on_b,
            ordering,
            next_timeout_height,
        };

        ctx_a.deliver(MsgEnvelope::Channel(ChannelMsg::OpenInit(msg)))?;

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn channel_open_try_on_b(
        ctx_b: &mut MockContext,
        ctx_a: &MockContext,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
        conn_id_on_b: ConnectionId,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        let chan_end_on_a = ctx_a
            .channel_end(&ChannelEndPath::new(&port_id_on_a, &chan_id_on_a))
            .map_err(RelayerError::Query)?;
        let client_id_on_b = Self::client_of_connection(ctx_b, &conn_id_on_b)?;

        let (proof_chan_end_on_a, proof_height_on_a) = Self::sync_and_prove(
            ctx_b,
            ctx_a,
            &client_id_on_b,
            ChannelEndPath::new(&port_id_on_a, &chan_id_on_a),
        )?;

        info!(
            chain = %ctx_b.chain_name,
            port = %port_id_on_b,
            channel = %chan_id_on_b,
            proof_height = %proof_height_on_a,
            "channel open try"
        );

        let msg = MsgChannelOpenTry {
            port_id_on_b,
            chan_id_on_b,
            connection_id_on_b: conn_id_on_b,
            port_id_on_a,
            chan_id_on_a,
            ordering: *chan_end_on_a.ordering(),
            proof_chan_end_on_a,
            proof_height_on_a,
            timeout_height_on_a: *chan_end_on_a.next_timeout_height(),
            next_timeout_height,
        };

        ctx_b.deliver(MsgEnvelope::Channel(ChannelMsg::OpenTry(msg)))?;

        Ok(())
    }

    pub fn channel_open_ack_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        next_timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        let chan_end_on_a = ctx_a
            .channel_end(&ChannelEndPath::new(&port_id_on_a, &chan_id_on_a))
            .map_err(RelayerError::Query)?;
        let counterparty = chan_end_on_a.counterparty();
        let chan_end_path_on_b =
            ChannelEndPath::new(counterparty.port_id(), counterparty.channel_id());
        let chan_end_on_b = ctx_b
            .channel_end(&chan_end_path_on_b)
            .map_err(RelayerError::Query)?;
        let client_id_on_a = Self::client_of_channel(ctx_a, &port_id_on_a, &chan_id_on_a)?;

        let (proof_chan_end_on_b, proof_height_on_b) =
            Self::sync_and_prove(ctx_a, ctx_b, &client_id_on_a, chan_end_path_on_b)?;

        info!(
            chain = %ctx_a.chain_name,
            port = %port_id_on_a,
            channel = %chan_id_on_a,
            proof_height = %proof_height_on_b,
            "channel open ack"
        );

        let msg = MsgChannelOpenAck {
            port_id_on_a,
            chan_id_on_a,
            proof_chan_end_on_b,
            proof_height_on_b,
            timeout_height_on_b: *chan_end_on_b.next_timeout_height(),
            next_timeout_height,
        };

        ctx_a.deliver(MsgEnvelope::Channel(ChannelMsg::OpenAck(msg)))?;

        Ok(())
    }

    pub fn channel_open_confirm_on_b(
        ctx_b: &mut MockContext,
        ctx_a: &MockContext,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
    ) -> Result<(), RelayerError> {
        let chan_end_on_b = ctx_b
            .channel_end(&ChannelEndPath::new(&port_id_on_b, &chan_id_on_b))
            .map_err(RelayerError::Query)?;
        let counterparty = chan_end_on_b.counterparty();
        let chan_end_path_on_a =
            ChannelEndPath::new(counterparty.port_id(), counterparty.channel_id());
        let chan_end_on_a = ctx_a
            .channel_end(&chan_end_path_on_a)
            .map_err(RelayerError::Query)?;
        let client_id_on_b = Self::client_of_channel(ctx_b, &port_id_on_b, &chan_id_on_b)?;

        let (proof_chan_end_on_a, proof_height_on_a) =
            Self::sync_and_prove(ctx_b, ctx_a, &client_id_on_b, chan_end_path_on_a)?;

        info!(
            chain = %ctx_b.chain_name,
            port = %port_id_on_b,
            channel = %chan_id_on_b,
            proof_height = %proof_height_on_a,
            "channel open confirm"
        );

        let msg = MsgChannelOpenConfirm {
            port_id_on_b,
            chan_id_on_b,
            proof_chan_end_on_a,
            proof_height_on_a,
            timeout_height_on_a: *chan_end_on_a.next_timeout_height(),
        };

        ctx_b.deliver(MsgEnvelope::Channel(ChannelMsg::OpenConfirm(msg)))?;

        Ok(())
    }

    /// Closes the stalled channel, proving that `ctx_b` never stored its end.
    pub fn channel_open_timeout_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &MockContext,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
    ) -> Result<(), RelayerError> {
        let chan_end_on_a = ctx_a
            .channel_end(&ChannelEndPath::new(&port_id_on_a, &chan_id_on_a))
            .map_err(RelayerError::Query)?;
        let counterparty = chan_end_on_a.counterparty();
        let chan_end_path_on_b =
            ChannelEndPath::new(counterparty.port_id(), counterparty.channel_id());
        let client_id_on_a = Self::client_of_channel(ctx_a, &port_id_on_a, &chan_id_on_a)?;

        let (proof_unreceived_on_b, proof_height_on_b) =
            Self::sync_and_prove(ctx_a, ctx_b, &client_id_on_a, chan_end_path_on_b)?;

        info!(
            chain = %ctx_a.chain_name,
            port = %port_id_on_a,
            channel = %chan_id_on_a,
            proof_height = %proof_height_on_b,
            "channel open timeout"
        );

        let msg = MsgChannelOpenTimeout {
            port_id_on_a,
            chan_id_on_a,
            proof_unreceived_on_b,
            proof_height_on_b,
        };

        ctx_a.deliver(MsgEnvelope::Channel(ChannelMsg::OpenTimeout(msg)))?;

        Ok(())
    }

    pub fn channel_close_init_on_a(
        ctx_a: &mut MockContext,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
    ) -> Result<(), RelayerError> {
        info!(
            chain = %ctx_a.chain_name,
            port = %port_id_on_a,
            channel = %chan_id_on_a,
            "channel close init"
        );

        let msg = MsgChannelCloseInit {
            port_id_on_a,
            chan_id_on_a,
        };

        ctx_a.deliver(MsgEnvelope::Channel(ChannelMsg::CloseInit(msg)))?;

        Ok(())
    }

    pub fn channel_close_confirm_on_b(
        ctx_b: &mut MockContext,
        ctx_a: &MockContext,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
    ) -> Result<(), RelayerError> {
        let chan_end_on_b = ctx_b
            .channel_end(&ChannelEndPath::new(&port_id_on_b, &chan_id_on_b))
            .map_err(RelayerError::Query)?;
        let counterparty = chan_end_on_b.counterparty();
        let chan_end_path_on_a =
            ChannelEndPath::new(counterparty.port_id(), counterparty.channel_id());
        let client_id_on_b = Self::client_of_channel(ctx_b, &port_id_on_b, &chan_id_on_b)?;

        let (proof_chan_end_on_a, proof_height_on_a) =
            Self::sync_and_prove(ctx_b, ctx_a, &client_id_on_b, chan_end_path_on_a)?;

        info!(
            chain = %ctx_b.chain_name,
            port = %port_id_on_b,
            channel = %chan_id_on_b,
            proof_height = %proof_height_on_a,
            "channel close confirm"
        );

        let msg = MsgChannelCloseConfirm {
            port_id_on_b,
            chan_id_on_b,
            proof_chan_end_on_a,
            proof_height_on_a,
        };

        ctx_b.deliver(MsgEnvelope::Channel(ChannelMsg::CloseConfirm(msg)))?;

        Ok(())
    }

    /// Runs the four steps of the channel handshake, started on `ctx_a`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_channel_on_a(
        ctx_a: &mut MockContext,
        ctx_b: &mut MockContext,
        conn_id_on_a: ConnectionId,
        port_id_on_a: PortId,
        chan_id_on_a: ChannelId,
        conn_id_on_b: ConnectionId,
        port_id_on_b: PortId,
        chan_id_on_b: ChannelId,
        ordering: Order,
        timeout_height: TimeoutHeight,
    ) -> Result<(), RelayerError> {
        Self::channel_open_init_on_a(
            ctx_a,
            port_id_on_a.clone(),
            chan_id_on_a.clone(),
            conn_id_on_a,
            port_id_on_b.clone(),
            chan_id_on_b.clone(),
            ordering,
            timeout_height,
        )?;
        Self::channel_open_try_on_b(
            ctx_b,
            ctx_a,
            port_id_on_b.clone(),
            chan_id_on_b.clone(),
            conn_id_on_b,
            port_id_on_a.clone(),
            chan_id_on_a.clone(),
            timeout_height,
        )?;
        Self::channel_open_ack_on_a(
            ctx_a,
            ctx_b,
            port_id_on_a,
            chan_id_on_a,
            timeout_height,
        )?;
        Self::channel_open_confirm_on_b(ctx_b, ctx_a, port_id_on_b, chan_id_on_b)?;

        Ok(())
    }
}
