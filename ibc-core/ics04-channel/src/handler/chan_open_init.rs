//! Protocol logic specific to ICS4 messages of type `MsgChannelOpenInit`.

use ibc_handshake_channel_types::channel::{ChannelEnd, Counterparty, State};
use ibc_handshake_channel_types::events::OpenInit;
use ibc_handshake_channel_types::msgs::MsgChannelOpenInit;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ChannelEndPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{verify_chan_id_unused, verify_connection_open};

pub fn chan_open_init_validate<ValCtx>(
    ctx_a: &ValCtx,
    msg: MsgChannelOpenInit,
) -> Result<(), HandlerError>
where
    ValCtx: ValidationContext,
{
    validate(ctx_a, &msg)
}

pub fn chan_open_init_execute<ExecCtx>(
    ctx_a: &mut ExecCtx,
    msg: MsgChannelOpenInit,
) -> Result<(), HandlerError>
where
    ExecCtx: ExecutionContext,
{
    let chan_end_on_a = ChannelEnd::new(
        State::Init,
        msg.ordering,
        Counterparty::new(msg.port_id_on_b.clone(), msg.chan_id_on_b.clone()),
        msg.connection_id_on_a.clone(),
        msg.next_timeout_height,
    );

    // state changes
    {
        let chan_end_path_on_a = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
        ctx_a.store_channel(&chan_end_path_on_a, chan_end_on_a)?;
    }

    // emit events and logs
    {
        ctx_a.log_message(format!(
            "success: channel open init with channel identifier: {}",
            msg.chan_id_on_a
        ))?;

        let core_event = IbcEvent::OpenInitChannel(OpenInit::new(
            msg.port_id_on_a,
            msg.chan_id_on_a,
            msg.port_id_on_b,
            msg.chan_id_on_b,
            msg.connection_id_on_a,
        ));
        ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
        ctx_a.emit_ibc_event(core_event)?;
    }

    Ok(())
}

fn validate<Ctx>(ctx_a: &Ctx, msg: &MsgChannelOpenInit) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    // An OPEN connection running on the local (host) chain should exist.
    verify_connection_open(ctx_a, &msg.connection_id_on_a)?;

    verify_chan_id_unused(ctx_a, &msg.port_id_on_a, &msg.chan_id_on_a, State::Init)?;

    Ok(())
}
