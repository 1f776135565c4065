//! Protocol logic specific to processing ICS3 messages of type `MsgConnectionOpenConfirm`.

use ibc_handshake_client::types::TimeoutHeight;
use ibc_handshake_connection_types::events::OpenConfirm;
use ibc_handshake_connection_types::msgs::MsgConnectionOpenConfirm;
use ibc_handshake_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::identifiers::{ClientId, ConnectionId};
use ibc_handshake_host::types::path::ConnectionPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{verify_not_expired, CounterpartyConnection};

pub fn validate<Ctx>(ctx_b: &Ctx, msg: &MsgConnectionOpenConfirm) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let vars = LocalVars::new(ctx_b, msg)?;
    validate_impl(ctx_b, msg, &vars)
}

fn validate_impl<Ctx>(
    ctx_b: &Ctx,
    msg: &MsgConnectionOpenConfirm,
    vars: &LocalVars,
) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let conn_end_on_b = vars.conn_end_on_b();

    conn_end_on_b.verify_state_matches(&msg.conn_id_on_b, &State::TryOpen)?;

    verify_not_expired(ctx_b, &msg.conn_id_on_b, &msg.timeout_height_on_a)?;

    // Verify proofs
    {
        let expected_conn_end_on_a = ConnectionEnd::new(
            State::Open,
            vars.client_id_on_a().clone(),
            Counterparty::new(
                vars.client_id_on_b().clone(),
                msg.conn_id_on_b.clone(),
                ctx_b.commitment_prefix(),
            ),
            msg.timeout_height_on_a,
        );

        CounterpartyConnection {
            client_id: vars.client_id_on_b(),
            prefix: conn_end_on_b.counterparty().prefix(),
            conn_id: vars.conn_id_on_a(),
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

pub fn execute<Ctx>(ctx_b: &mut Ctx, msg: &MsgConnectionOpenConfirm) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let vars = LocalVars::new(ctx_b, msg)?;
    execute_impl(ctx_b, msg, vars)
}

fn execute_impl<Ctx>(
    ctx_b: &mut Ctx,
    msg: &MsgConnectionOpenConfirm,
    vars: LocalVars,
) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let client_id_on_a = vars.client_id_on_a();
    let client_id_on_b = vars.client_id_on_b();
    let conn_id_on_a = vars.conn_id_on_a();

    let event = IbcEvent::OpenConfirmConnection(OpenConfirm::new(
        msg.conn_id_on_b.clone(),
        client_id_on_b.clone(),
        conn_id_on_a.clone(),
        client_id_on_a.clone(),
    ));
    ctx_b.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx_b.emit_ibc_event(event)?;
    ctx_b.log_message("success: conn_open_confirm verification passed".to_string())?;

    {
        let new_conn_end_on_b = {
            let mut new_conn_end_on_b = vars.conn_end_on_b;

            new_conn_end_on_b.set_state(State::Open);
            new_conn_end_on_b.set_next_timeout_height(TimeoutHeight::Never);
            new_conn_end_on_b
        };

        ctx_b.store_connection(&ConnectionPath::new(&msg.conn_id_on_b), new_conn_end_on_b)?;
    }

    Ok(())
}

struct LocalVars {
    conn_end_on_b: ConnectionEnd,
}

impl LocalVars {
    fn new<Ctx>(ctx_b: &Ctx, msg: &MsgConnectionOpenConfirm) -> Result<Self, HandlerError>
    where
        Ctx: ValidationContext,
    {
        Ok(Self {
            conn_end_on_b: ctx_b.connection_end(&msg.conn_id_on_b)?,
        })
    }

    fn conn_end_on_b(&self) -> &ConnectionEnd {
        &self.conn_end_on_b
    }

    fn client_id_on_a(&self) -> &ClientId {
        self.conn_end_on_b.counterparty().client_id()
    }

    fn client_id_on_b(&self) -> &ClientId {
        self.conn_end_on_b.client_id()
    }

    fn conn_id_on_a(&self) -> &ConnectionId {
        self.conn_end_on_b.counterparty().connection_id()
    }
}
