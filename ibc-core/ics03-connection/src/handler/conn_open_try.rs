//! Protocol logic specific to processing ICS3 messages of type `MsgConnectionOpenTry`.

use ibc_handshake_connection_types::events::OpenTry;
use ibc_handshake_connection_types::msgs::MsgConnectionOpenTry;
use ibc_handshake_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ConnectionPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{verify_conn_id_unused, verify_not_expired, CounterpartyConnection};

pub fn validate<Ctx>(ctx_b: &Ctx, msg: MsgConnectionOpenTry) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    verify_conn_id_unused(ctx_b, &msg.conn_id_on_b, State::TryOpen)?;

    verify_not_expired(ctx_b, &msg.conn_id_on_b, &msg.timeout_height_on_a)?;

    // Proof verification.
    {
        let expected_conn_end_on_a = ConnectionEnd::new(
            State::Init,
            msg.counterparty.client_id().clone(),
            Counterparty::new(
                msg.client_id_on_b.clone(),
                msg.conn_id_on_b.clone(),
                ctx_b.commitment_prefix(),
            ),
            msg.timeout_height_on_a,
        );

        CounterpartyConnection {
            client_id: &msg.client_id_on_b,
            prefix: msg.counterparty.prefix(),
            conn_id: msg.counterparty.connection_id(),
        }
        .verify(
            ctx_b,
            &msg.conn_id_on_b,
            msg.proof_height_on_a,
            &msg.proof_conn_end_on_a,
            Some(&expected_conn_end_on_a),
        )?;
    }

    Ok(())
}

pub fn execute<Ctx>(ctx_b: &mut Ctx, msg: MsgConnectionOpenTry) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let conn_end_on_b = ConnectionEnd::new(
        State::TryOpen,
        msg.client_id_on_b.clone(),
        msg.counterparty.clone(),
        msg.next_timeout_height,
    );

    ctx_b.log_message(format!(
        "success: conn_open_try: verified connection {} on the counterparty",
        msg.counterparty.connection_id()
    ))?;

    let event = IbcEvent::OpenTryConnection(OpenTry::new(
        msg.conn_id_on_b.clone(),
        msg.client_id_on_b,
        msg.counterparty.connection_id,
        msg.counterparty.client_id,
    ));
    ctx_b.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx_b.emit_ibc_event(event)?;

    ctx_b.store_connection(&ConnectionPath::new(&msg.conn_id_on_b), conn_end_on_b)?;

    Ok(())
}
