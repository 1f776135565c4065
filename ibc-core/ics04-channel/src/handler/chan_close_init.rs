//! Protocol logic specific to ICS4 messages of type `MsgChannelCloseInit`.

use ibc_handshake_channel_types::events::CloseInit;
use ibc_handshake_channel_types::msgs::MsgChannelCloseInit;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ChannelEndPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{close, verify_connection_open};

pub fn chan_close_init_validate<ValCtx>(
    ctx_a: &ValCtx,
    msg: MsgChannelCloseInit,
) -> Result<(), HandlerError>
where
    ValCtx: ValidationContext,
{
    validate(ctx_a, &msg)
}

pub fn chan_close_init_execute<ExecCtx>(
    ctx_a: &mut ExecCtx,
    msg: MsgChannelCloseInit,
) -> Result<(), HandlerError>
where
    ExecCtx: ExecutionContext,
{
    let chan_end_path_on_a = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
    let chan_end_on_a = ctx_a.channel_end(&chan_end_path_on_a)?;

    // state changes
    {
        ctx_a.store_channel(&chan_end_path_on_a, close(chan_end_on_a.clone()))?;
    }

    // emit events and logs
    {
        ctx_a.log_message("success: channel close init".to_string())?;

        let core_event = IbcEvent::CloseInitChannel(CloseInit::new(
            msg.port_id_on_a,
            msg.chan_id_on_a,
            chan_end_on_a.remote.port_id,
            chan_end_on_a.remote.channel_id,
            chan_end_on_a.connection_id,
        ));
        ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
        ctx_a.emit_ibc_event(core_event)?;
    }

    Ok(())
}

fn validate<Ctx>(ctx_a: &Ctx, msg: &MsgChannelCloseInit) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let chan_end_path_on_a = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
    let chan_end_on_a = ctx_a.channel_end(&chan_end_path_on_a)?;

    verify_connection_open(ctx_a, chan_end_on_a.connection_id())?;

    // Validate that the channel end is in a state where it can be closed.
    chan_end_on_a.verify_not_closed()?;

    Ok(())
}
