//! Protocol logic specific to processing ICS3 messages of type `MsgConnectionOpenTimeout`.
//!
//! A connection left in `Init` is closed once the counterparty has provably
//! passed the recorded deadline without ever storing its end.

use ibc_handshake_client::types::TimeoutHeight;
use ibc_handshake_connection_types::error::ConnectionError;
use ibc_handshake_connection_types::events::OpenTimeout;
use ibc_handshake_connection_types::msgs::MsgConnectionOpenTimeout;
use ibc_handshake_connection_types::{ConnectionEnd, State};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ConnectionPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::CounterpartyConnection;

pub fn validate<Ctx>(ctx_a: &Ctx, msg: MsgConnectionOpenTimeout) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let conn_end_on_a = ctx_a.connection_end(&msg.conn_id_on_a)?;

    conn_end_on_a.verify_state_matches(&msg.conn_id_on_a, &State::Init)?;

    let timeout_height = match conn_end_on_a.next_timeout_height() {
        TimeoutHeight::At(height) => *height,
        TimeoutHeight::Never => {
            return Err(ConnectionError::NoPendingTimeout {
                connection_id: msg.conn_id_on_a,
            }
            .into())
        }
    };

    if msg.proof_height_on_b <= timeout_height {
        return Err(ConnectionError::TimeoutNotReached {
            connection_id: msg.conn_id_on_a,
            proof_height: msg.proof_height_on_b,
            timeout_height,
        }
        .into());
    }

    let counterparty = conn_end_on_a.counterparty();

    CounterpartyConnection {
        client_id: conn_end_on_a.client_id(),
        prefix: counterparty.prefix(),
        conn_id: counterparty.connection_id(),
    }
    .verify(
        ctx_a,
        &msg.conn_id_on_a,
        msg.proof_height_on_b,
        &msg.proof_unreceived_on_b,
        None,
    )?;

    Ok(())
}

pub fn execute<Ctx>(ctx_a: &mut Ctx, msg: MsgConnectionOpenTimeout) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let conn_end_on_a = ctx_a.connection_end(&msg.conn_id_on_a)?;

    let event = IbcEvent::OpenTimeoutConnection(OpenTimeout::new(
        msg.conn_id_on_a.clone(),
        conn_end_on_a.client_id().clone(),
        conn_end_on_a.counterparty().connection_id().clone(),
        conn_end_on_a.counterparty().client_id().clone(),
    ));
    ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx_a.emit_ibc_event(event)?;

    ctx_a.log_message(format!(
        "success: conn_open_timeout: closed connection {} stalled at {}",
        msg.conn_id_on_a,
        conn_end_on_a.next_timeout_height()
    ))?;

    let closed = close(conn_end_on_a);
    ctx_a.store_connection(&ConnectionPath::new(&msg.conn_id_on_a), closed)?;

    Ok(())
}

pub(crate) fn close(mut conn_end: ConnectionEnd) -> ConnectionEnd {
    conn_end.set_state(State::Closed);
    conn_end.set_next_timeout_height(TimeoutHeight::Never);
    conn_end
}
