//! Protocol logic specific to ICS3 messages of type `MsgConnectionOpenInit`.

use ibc_handshake_client::context::prelude::*;
use ibc_handshake_connection_types::events::OpenInit;
use ibc_handshake_connection_types::msgs::MsgConnectionOpenInit;
use ibc_handshake_connection_types::{ConnectionEnd, State};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ConnectionPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::verify_conn_id_unused;

pub fn validate<Ctx>(ctx_a: &Ctx, msg: MsgConnectionOpenInit) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    verify_conn_id_unused(ctx_a, &msg.conn_id_on_a, State::Init)?;

    // An IBC client running on the local (host) chain should exist.
    ctx_a
        .get_client_validation_context()
        .client_state(&msg.client_id_on_a)?;

    Ok(())
}

pub fn execute<Ctx>(ctx_a: &mut Ctx, msg: MsgConnectionOpenInit) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let conn_end_on_a = ConnectionEnd::new(
        State::Init,
        msg.client_id_on_a.clone(),
        msg.counterparty.clone(),
        msg.next_timeout_height,
    );

    ctx_a.log_message(format!(
        "success: conn_open_init: recorded connection {} in state {}",
        msg.conn_id_on_a,
        conn_end_on_a.state()
    ))?;

    let event = IbcEvent::OpenInitConnection(OpenInit::new(
        msg.conn_id_on_a.clone(),
        msg.client_id_on_a,
        msg.counterparty.connection_id,
        msg.counterparty.client_id,
    ));
    ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx_a.emit_ibc_event(event)?;

    ctx_a.store_connection(&ConnectionPath::new(&msg.conn_id_on_a), conn_end_on_a)?;

    Ok(())
}
