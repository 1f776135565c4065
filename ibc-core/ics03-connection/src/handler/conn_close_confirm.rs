//! Protocol logic specific to processing ICS3 messages of type `MsgConnectionCloseConfirm`.

use ibc_handshake_client::types::TimeoutHeight;
use ibc_handshake_connection_types::events::CloseConfirm;
use ibc_handshake_connection_types::msgs::MsgConnectionCloseConfirm;
use ibc_handshake_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ConnectionPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::conn_open_timeout::close;
use super::CounterpartyConnection;

pub fn validate<Ctx>(ctx_b: &Ctx, msg: &MsgConnectionCloseConfirm) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let conn_end_on_b = ctx_b.connection_end(&msg.conn_id_on_b)?;

    conn_end_on_b.verify_state_in(
        &msg.conn_id_on_b,
        &[State::Init, State::TryOpen, State::Open],
    )?;

    let counterparty = conn_end_on_b.counterparty();

    let expected_conn_end_on_a = ConnectionEnd::new(
        State::Closed,
        counterparty.client_id().clone(),
        Counterparty::new(
            conn_end_on_b.client_id().clone(),
            msg.conn_id_on_b.clone(),
            ctx_b.commitment_prefix(),
        ),
        TimeoutHeight::Never,
    );

    CounterpartyConnection {
        client_id: conn_end_on_b.client_id(),
        prefix: counterparty.prefix(),
        conn_id: counterparty.connection_id(),
    }
    .verify(
        ctx_b,
        &msg.conn_id_on_b,
        msg.proof_height_on_a,
        &msg.proof_conn_end_on_a,
        Some(&expected_conn_end_on_a),
    )?;

    Ok(())
}

pub fn execute<Ctx>(ctx_b: &mut Ctx, msg: &MsgConnectionCloseConfirm) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let conn_end_on_b = ctx_b.connection_end(&msg.conn_id_on_b)?;

    ctx_b.log_message("success: conn_close_confirm verification passed".to_string())?;

    let event = IbcEvent::CloseConfirmConnection(CloseConfirm::new(
        msg.conn_id_on_b.clone(),
        conn_end_on_b.client_id().clone(),
        conn_end_on_b.counterparty().connection_id().clone(),
        conn_end_on_b.counterparty().client_id().clone(),
    ));
    ctx_b.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx_b.emit_ibc_event(event)?;

    ctx_b.store_connection(
        &ConnectionPath::new(&msg.conn_id_on_b),
        close(conn_end_on_b),
    )?;

    Ok(())
}
