//! Protocol logic specific to ICS4 messages of type `MsgChannelOpenTimeout`.

use ibc_handshake_channel_types::channel::State;
use ibc_handshake_channel_types::error::ChannelError;
use ibc_handshake_channel_types::events::OpenTimeout;
use ibc_handshake_channel_types::msgs::MsgChannelOpenTimeout;
use ibc_handshake_client::types::TimeoutHeight;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ChannelEndPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{close, verify_connection_open, CounterpartyChannel};

pub fn chan_open_timeout_validate<ValCtx>(
    ctx_a: &ValCtx,
    msg: MsgChannelOpenTimeout,
) -> Result<(), HandlerError>
where
    ValCtx: ValidationContext,
{
    validate(ctx_a, &msg)
}

pub fn chan_open_timeout_execute<ExecCtx>(
    ctx_a: &mut ExecCtx,
    msg: MsgChannelOpenTimeout,
) -> Result<(), HandlerError>
where
    ExecCtx: ExecutionContext,
{
    let chan_end_path_on_a = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
    let chan_end_on_a = ctx_a.channel_end(&chan_end_path_on_a)?;

    ctx_a.store_channel(&chan_end_path_on_a, close(chan_end_on_a.clone()))?;

    ctx_a.log_message(format!(
        "success: channel open timeout: closed channel {} stalled at {}",
        msg.chan_id_on_a,
        chan_end_on_a.next_timeout_height()
    ))?;

    let core_event = IbcEvent::OpenTimeoutChannel(OpenTimeout::new(
        msg.port_id_on_a,
        msg.chan_id_on_a,
        chan_end_on_a.remote.port_id,
        chan_end_on_a.remote.channel_id,
        chan_end_on_a.connection_id,
    ));
    ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
    ctx_a.emit_ibc_event(core_event)?;

    Ok(())
}

fn validate<Ctx>(ctx_a: &Ctx, msg: &MsgChannelOpenTimeout) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let chan_end_path_on_a = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
    let chan_end_on_a = ctx_a.channel_end(&chan_end_path_on_a)?;

    let conn_end_on_a = verify_connection_open(ctx_a, chan_end_on_a.connection_id())?;

    chan_end_on_a.verify_state_matches(&State::Init)?;

    let timeout_height = match chan_end_on_a.next_timeout_height() {
        TimeoutHeight::At(height) => *height,
        TimeoutHeight::Never => {
            return Err(ChannelError::NoPendingTimeout {
                channel_id: msg.chan_id_on_a.clone(),
            }
            .into())
        }
    };

    if msg.proof_height_on_b <= timeout_height {
        return Err(ChannelError::TimeoutNotReached {
            channel_id: msg.chan_id_on_a.clone(),
            proof_height: msg.proof_height_on_b,
            timeout_height,
        }
        .into());
    }

    let counterparty = chan_end_on_a.counterparty();

    CounterpartyChannel {
        conn_end: &conn_end_on_a,
        port_id: counterparty.port_id(),
        chan_id: counterparty.channel_id(),
    }
    .verify(
        ctx_a,
        &msg.chan_id_on_a,
        msg.proof_height_on_b,
        &msg.proof_unreceived_on_b,
        None,
    )?;

    Ok(())
}
