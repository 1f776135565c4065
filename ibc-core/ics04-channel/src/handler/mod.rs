//! Handlers for every step of the channel handshake, and the sequence
//! counters of open channels.

use ibc_handshake_channel_types::channel::{ChannelEnd, State};
use ibc_handshake_channel_types::error::ChannelError;
use ibc_handshake_client::context::verification::{verify_commitment, ExpectedValue};
use ibc_handshake_client::types::{Height, TimeoutHeight};
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_connection_types::ConnectionEnd;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_host::types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_handshake_host::types::path::{ChannelEndPath, Path};
use ibc_handshake_host::ValidationContext;
use ibc_handshake_primitives::Codec;

pub mod chan_close_confirm;
pub mod chan_close_init;
pub mod chan_open_ack;
pub mod chan_open_confirm;
pub mod chan_open_init;
pub mod chan_open_timeout;
pub mod chan_open_try;
pub mod sequence;

/// Returns the connection `conn_id`, failing with `ConnectionNotOpen` unless
/// it exists and is open.
pub(crate) fn verify_connection_open<Ctx>(
    ctx: &Ctx,
    conn_id: &ConnectionId,
) -> Result<ConnectionEnd, HandlerError>
where
    Ctx: ValidationContext,
{
    match ctx.query_connection_end(conn_id)? {
        Some(conn_end) if conn_end.is_open() => Ok(conn_end),
        _ => Err(ChannelError::ConnectionNotOpen {
            connection_id: conn_id.clone(),
        }
        .into()),
    }
}

/// Fails unless a channel may enter `next` under `(port_id, chan_id)`.
///
/// A free identifier may enter either opening state, a closed channel may
/// only be initialised again.
pub(crate) fn verify_chan_id_unused<Ctx>(
    ctx: &Ctx,
    port_id: &PortId,
    chan_id: &ChannelId,
    next: State,
) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let current = ctx
        .query_channel_end(&ChannelEndPath::new(port_id, chan_id))?
        .map_or(State::Uninitialized, |chan_end| *chan_end.state());

    if !current.can_transition_to(next) {
        return Err(ChannelError::ChannelAlreadyExists {
            port_id: port_id.clone(),
            channel_id: chan_id.clone(),
            state: current,
        }
        .into());
    }

    Ok(())
}

/// Fails if the host chain is already past `timeout_height`.
pub(crate) fn verify_not_expired<Ctx>(
    ctx: &Ctx,
    chan_id: &ChannelId,
    timeout_height: &TimeoutHeight,
) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let host_height = ctx.host_height()?;

    if timeout_height.has_expired(host_height) {
        return Err(ChannelError::HandshakeExpired {
            channel_id: chan_id.clone(),
            timeout_height: *timeout_height,
            host_height,
        }
        .into());
    }

    Ok(())
}

/// The channel end the counterparty must have committed, reached through the
/// local connection the channel runs on.
pub(crate) struct CounterpartyChannel<'a> {
    pub conn_end: &'a ConnectionEnd,
    pub port_id: &'a PortId,
    pub chan_id: &'a ChannelId,
}

impl CounterpartyChannel<'_> {
    /// Verifies that the counterparty committed `expected` under its channel
    /// path, or nothing if `expected` is `None`.
    pub(crate) fn verify<Ctx>(
        &self,
        ctx: &Ctx,
        local_chan_id: &ChannelId,
        proof_height: Height,
        proof: &CommitmentProofBytes,
        expected: Option<&ChannelEnd>,
    ) -> Result<(), HandlerError>
    where
        Ctx: ValidationContext,
    {
        let expected = match expected {
            Some(chan_end) => ExpectedValue::Present(chan_end.encode_vec()),
            None => ExpectedValue::Absent,
        };

        verify_commitment(
            ctx.get_client_validation_context(),
            self.conn_end.client_id(),
            proof_height,
            self.conn_end.counterparty().prefix(),
            Path::ChannelEnd(ChannelEndPath::new(self.port_id, self.chan_id)),
            expected,
            proof,
        )
        .map_err(|e| ChannelError::VerifyChannelState {
            channel_id: local_chan_id.clone(),
            client_error: e,
        })?;

        Ok(())
    }
}

pub(crate) fn close(mut chan_end: ChannelEnd) -> ChannelEnd {
    chan_end.set_state(State::Closed);
    chan_end.set_next_timeout_height(TimeoutHeight::Never);
    chan_end
}
