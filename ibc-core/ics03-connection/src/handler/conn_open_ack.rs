//! Protocol logic specific to processing ICS3 messages of type `MsgConnectionOpenAck`.

use ibc_handshake_connection_types::events::OpenAck;
use ibc_handshake_connection_types::msgs::MsgConnectionOpenAck;
use ibc_handshake_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::identifiers::ClientId;
use ibc_handshake_host::types::path::ConnectionPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{verify_not_expired, CounterpartyConnection};

pub fn validate<Ctx>(ctx_a: &Ctx, msg: MsgConnectionOpenAck) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let vars = LocalVars::new(ctx_a, &msg)?;
    validate_impl(ctx_a, &msg, &vars)
}

fn validate_impl<Ctx>(
    ctx_a: &Ctx,
    msg: &MsgConnectionOpenAck,
    vars: &LocalVars,
) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    vars.conn_end_on_a
        .verify_state_matches(&msg.conn_id_on_a, &State::Init)?;

    verify_not_expired(ctx_a, &msg.conn_id_on_a, &msg.timeout_height_on_b)?;

    // Proof verification.
    {
        let counterparty = vars.conn_end_on_a.counterparty();

        let expected_conn_end_on_b = ConnectionEnd::new(
            State::TryOpen,
            vars.client_id_on_b().clone(),
            Counterparty::new(
                vars.client_id_on_a().clone(),
                msg.conn_id_on_a.clone(),
                ctx_a.commitment_prefix(),
            ),
            msg.timeout_height_on_b,
        );

        CounterpartyConnection {
            client_id: vars.client_id_on_a(),
            prefix: counterparty.prefix(),
            conn_id: counterparty.connection_id(),
        }
        .verify(
            ctx_a,
            &msg.conn_id_on_a,
            msg.proof_height_on_b,
            &msg.proof_conn_end_on_b,
            Some(&expected_conn_end_on_b),
        )?;
    }

    Ok(())
}

pub fn execute<Ctx>(ctx_a: &mut Ctx, msg: MsgConnectionOpenAck) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let vars = LocalVars::new(ctx_a, &msg)?;
    execute_impl(ctx_a, msg, vars)
}

fn execute_impl<Ctx>(
    ctx_a: &mut Ctx,
    msg: MsgConnectionOpenAck,
    vars: LocalVars,
) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let event = IbcEvent::OpenAckConnection(OpenAck::new(
        msg.conn_id_on_a.clone(),
        vars.client_id_on_a().clone(),
        vars.conn_end_on_a.counterparty().connection_id().clone(),
        vars.client_id_on_b().clone(),
    ));
    ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx_a.emit_ibc_event(event)?;

    ctx_a.log_message("success: conn_open_ack verification passed".to_string())?;

    {
        let new_conn_end_on_a = {
            let mut new_conn_end_on_a = vars.conn_end_on_a;
            new_conn_end_on_a.set_state(State::Open);
            new_conn_end_on_a.set_next_timeout_height(msg.next_timeout_height);
            new_conn_end_on_a
        };

        ctx_a.store_connection(&ConnectionPath::new(&msg.conn_id_on_a), new_conn_end_on_a)?;
    }

    Ok(())
}

struct LocalVars {
    conn_end_on_a: ConnectionEnd,
}

impl LocalVars {
    fn new<Ctx>(ctx_a: &Ctx, msg: &MsgConnectionOpenAck) -> Result<Self, HandlerError>
    where
        Ctx: ValidationContext,
    {
        Ok(LocalVars {
            conn_end_on_a: ctx_a.connection_end(&msg.conn_id_on_a)?,
        })
    }

    fn client_id_on_a(&self) -> &ClientId {
        self.conn_end_on_a.client_id()
    }

    fn client_id_on_b(&self) -> &ClientId {
        self.conn_end_on_a.counterparty().client_id()
    }
}
