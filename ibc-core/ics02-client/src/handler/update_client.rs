//! Protocol logic specific to processing ICS2 messages of type `MsgUpdateClient`.

use ibc_handshake_client_context::prelude::*;
use ibc_handshake_client_types::events::UpdateClient;
use ibc_handshake_client_types::msgs::MsgUpdateClient;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

pub fn validate<Ctx>(ctx: &Ctx, msg: MsgUpdateClient) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let MsgUpdateClient {
        client_id,
        client_message,
    } = msg;

    let client_val_ctx = ctx.get_client_validation_context();

    // Read client state from the host chain store. The client should already exist.
    let client_state = client_val_ctx.client_state(&client_id)?;

    client_state.verify_client_message(client_val_ctx, &client_id, client_message)?;

    Ok(())
}

pub fn execute<Ctx>(ctx: &mut Ctx, msg: MsgUpdateClient) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let MsgUpdateClient {
        client_id,
        client_message,
    } = msg;

    let client_exec_ctx = ctx.get_client_execution_context();

    let client_state = client_exec_ctx.client_state_mut(&client_id)?;

    let consensus_height = client_state.update_state(client_exec_ctx, &client_id, client_message)?;

    let event = IbcEvent::UpdateClient(UpdateClient::new(client_id.clone(), consensus_height));
    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Client))?;
    ctx.emit_ibc_event(event)?;

    ctx.log_message(format!(
        "success: updated client {client_id} to height {consensus_height}"
    ))?;

    Ok(())
}
