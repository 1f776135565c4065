//! Handlers for every step of the connection handshake.
//!
//! Each step exposes `validate`, which checks every precondition without
//! writing, and `execute`, which assumes `validate` passed and persists the
//! outcome.

use ibc_handshake_client::context::verification::{verify_commitment, ExpectedValue};
use ibc_handshake_client::types::{Height, TimeoutHeight};
use ibc_handshake_commitment_types::commitment::{CommitmentPrefix, CommitmentProofBytes};
use ibc_handshake_connection_types::error::ConnectionError;
use ibc_handshake_connection_types::{ConnectionEnd, State};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_host::types::identifiers::{ClientId, ConnectionId};
use ibc_handshake_host::types::path::{ConnectionPath, Path};
use ibc_handshake_host::ValidationContext;
use ibc_handshake_primitives::Codec;

pub mod conn_close_confirm;
pub mod conn_close_init;
pub mod conn_open_ack;
pub mod conn_open_confirm;
pub mod conn_open_init;
pub mod conn_open_timeout;
pub mod conn_open_try;

/// Fails unless a connection may enter `next` under `conn_id`.
///
/// A free identifier may enter either opening state, a closed connection may
/// only be initialised again.
pub(crate) fn verify_conn_id_unused<Ctx>(
    ctx: &Ctx,
    conn_id: &ConnectionId,
    next: State,
) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let current = ctx
        .query_connection_end(conn_id)?
        .map_or(State::Uninitialized, |conn_end| *conn_end.state());

    if !current.can_transition_to(next) {
        return Err(ConnectionError::ConnectionAlreadyExists {
            connection_id: conn_id.clone(),
            state: current,
        }
        .into());
    }

    Ok(())
}

/// Fails if the host chain is already past `timeout_height`.
pub(crate) fn verify_not_expired<Ctx>(
    ctx: &Ctx,
    conn_id: &ConnectionId,
    timeout_height: &TimeoutHeight,
) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let host_height = ctx.host_height()?;

    if timeout_height.has_expired(host_height) {
        return Err(ConnectionError::HandshakeExpired {
            connection_id: conn_id.clone(),
            timeout_height: *timeout_height,
            host_height,
        }
        .into());
    }

    Ok(())
}

/// The connection record the counterparty must have committed, as seen
/// through a local client tracking the counterparty.
pub(crate) struct CounterpartyConnection<'a> {
    /// Local client tracking the counterparty chain.
    pub client_id: &'a ClientId,
    /// Prefix of the counterparty store.
    pub prefix: &'a CommitmentPrefix,
    /// Identifier of the connection on the counterparty.
    pub conn_id: &'a ConnectionId,
}

impl CounterpartyConnection<'_> {
    /// Verifies that the counterparty committed `expected` under its
    /// connection path, or nothing if `expected` is `None`.
    ///
    /// Any failure is reported against the local connection `local_conn_id`.
    pub(crate) fn verify<Ctx>(
        &self,
        ctx: &Ctx,
        local_conn_id: &ConnectionId,
        proof_height: Height,
        proof: &CommitmentProofBytes,
        expected: Option<&ConnectionEnd>,
    ) -> Result<(), HandlerError>
    where
        Ctx: ValidationContext,
    {
        let expected = match expected {
            Some(conn_end) => ExpectedValue::Present(conn_end.encode_vec()),
            None => ExpectedValue::Absent,
        };

        verify_commitment(
            ctx.get_client_validation_context(),
            self.client_id,
            proof_height,
            self.prefix,
            Path::Connection(ConnectionPath::new(self.conn_id)),
            expected,
            proof,
        )
        .map_err(|e| ConnectionError::VerifyConnectionState {
            connection_id: local_conn_id.clone(),
            client_error: e,
        })?;

        Ok(())
    }
}
