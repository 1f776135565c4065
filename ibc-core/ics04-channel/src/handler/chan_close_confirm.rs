//! Protocol logic specific to ICS4 messages of type `MsgChannelCloseConfirm`.

use ibc_handshake_channel_types::channel::{ChannelEnd, Counterparty, State};
use ibc_handshake_channel_types::events::CloseConfirm;
use ibc_handshake_channel_types::msgs::MsgChannelCloseConfirm;
use ibc_handshake_client::types::TimeoutHeight;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ChannelEndPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{close, verify_connection_open, CounterpartyChannel};

pub fn chan_close_confirm_validate<ValCtx>(
    ctx_b: &ValCtx,
    msg: MsgChannelCloseConfirm,
) -> Result<(), HandlerError>
where
    ValCtx: ValidationContext,
{
    validate(ctx_b, &msg)
}

pub fn chan_close_confirm_execute<ExecCtx>(
    ctx_b: &mut ExecCtx,
    msg: MsgChannelCloseConfirm,
) -> Result<(), HandlerError>
where
    ExecCtx: ExecutionContext,
{
    let chan_end_path_on_b = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
    let chan_end_on_b = ctx_b.channel_end(&chan_end_path_on_b)?;

    // state changes
    {
        ctx_b.store_channel(&chan_end_path_on_b, close(chan_end_on_b.clone()))?;
    }

    // emit events and logs
    {
        ctx_b.log_message("success: channel close confirm".to_string())?;

        let core_event = IbcEvent::CloseConfirmChannel(CloseConfirm::new(
            msg.port_id_on_b,
            msg.chan_id_on_b,
            chan_end_on_b.remote.port_id,
            chan_end_on_b.remote.channel_id,
            chan_end_on_b.connection_id,
        ));
        ctx_b.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
        ctx_b.emit_ibc_event(core_event)?;
    }

    Ok(())
}

fn validate<Ctx>(ctx_b: &Ctx, msg: &MsgChannelCloseConfirm) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    // Retrieve the old channel end and validate it against the message.
    let chan_end_path_on_b = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
    let chan_end_on_b = ctx_b.channel_end(&chan_end_path_on_b)?;

    let conn_end_on_b = verify_connection_open(ctx_b, chan_end_on_b.connection_id())?;

    // Validate that the channel end is in a state where it can be closed.
    chan_end_on_b.verify_not_closed()?;

    // Verify proofs
    {
        let counterparty = chan_end_on_b.counterparty();

        let expected_chan_end_on_a = ChannelEnd::new(
            State::Closed,
            *chan_end_on_b.ordering(),
            Counterparty::new(msg.port_id_on_b.clone(), msg.chan_id_on_b.clone()),
            conn_end_on_b.counterparty().connection_id().clone(),
            TimeoutHeight::Never,
        );

        CounterpartyChannel {
            conn_end: &conn_end_on_b,
            port_id: counterparty.port_id(),
            chan_id: counterparty.channel_id(),
        }
        .verify(
            ctx_b,
            &msg.chan_id_on_b,
            msg.proof_height_on_a,
            &msg.proof_chan_end_on_a,
            Some(&expected_chan_end_on_a),
        )?;
    }

    Ok(())
}
