//! Protocol logic specific to processing ICS3 messages of type `MsgConnectionCloseInit`.

use ibc_handshake_connection_types::events::CloseInit;
use ibc_handshake_connection_types::msgs::MsgConnectionCloseInit;
use ibc_handshake_connection_types::State;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ConnectionPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::conn_open_timeout::close;

pub fn validate<Ctx>(ctx_a: &Ctx, msg: &MsgConnectionCloseInit) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let conn_end_on_a = ctx_a.connection_end(&msg.conn_id_on_a)?;

    conn_end_on_a.verify_state_in(
        &msg.conn_id_on_a,
        &[State::Init, State::TryOpen, State::Open],
    )?;

    Ok(())
}

pub fn execute<Ctx>(ctx_a: &mut Ctx, msg: &MsgConnectionCloseInit) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let conn_end_on_a = ctx_a.connection_end(&msg.conn_id_on_a)?;

    ctx_a.log_message("success: conn_close_init validation passed".to_string())?;

    let event = IbcEvent::CloseInitConnection(CloseInit::new(
        msg.conn_id_on_a.clone(),
        conn_end_on_a.client_id().clone(),
        conn_end_on_a.counterparty().connection_id().clone(),
        conn_end_on_a.counterparty().client_id().clone(),
    ));
    ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx_a.emit_ibc_event(event)?;

    ctx_a.store_connection(
        &ConnectionPath::new(&msg.conn_id_on_a),
        close(conn_end_on_a),
    )?;

    Ok(())
}
