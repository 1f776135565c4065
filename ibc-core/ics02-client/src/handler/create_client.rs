//! Protocol logic specific to processing ICS2 messages of type `MsgCreateClient`.

use ibc_handshake_client_context::prelude::*;
use ibc_handshake_client_types::error::ClientError;
use ibc_handshake_client_types::events::CreateClient;
use ibc_handshake_client_types::msgs::MsgCreateClient;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::{ClientStateMut, ClientStateRef, ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;
use ibc_handshake_primitives::Any;

pub fn validate<Ctx>(ctx: &Ctx, msg: MsgCreateClient) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
    <ClientStateRef<Ctx> as TryFrom<Any>>::Error: Into<ClientError>,
{
    let MsgCreateClient {
        client_id,
        client_state,
        consensus_state,
    } = msg;

    let client_val_ctx = ctx.get_client_validation_context();

    if client_val_ctx.client_exists(&client_id) {
        return Err(ClientError::ClientAlreadyExists { client_id }.into());
    };

    let client_state = ClientStateRef::<Ctx>::try_from(client_state).map_err(Into::into)?;

    client_state.verify_consensus_state(consensus_state)?;

    Ok(())
}

pub fn execute<Ctx>(ctx: &mut Ctx, msg: MsgCreateClient) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
    <ClientStateMut<Ctx> as TryFrom<Any>>::Error: Into<ClientError>,
{
    let MsgCreateClient {
        client_id,
        client_state,
        consensus_state,
    } = msg;

    let client_exec_ctx = ctx.get_client_execution_context();

    let client_state = ClientStateMut::<Ctx>::try_from(client_state).map_err(Into::into)?;

    client_state.initialise(client_exec_ctx, &client_id, consensus_state)?;

    let event = IbcEvent::CreateClient(CreateClient::new(
        client_id.clone(),
        client_state.latest_height(),
    ));
    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Client))?;
    ctx.emit_ibc_event(event)?;

    ctx.log_message(format!("success: created client {client_id}"))?;

    Ok(())
}
