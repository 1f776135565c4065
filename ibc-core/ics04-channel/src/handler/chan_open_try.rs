//! Protocol logic specific to ICS4 messages of type `MsgChannelOpenTry`.

use ibc_handshake_channel_types::channel::{ChannelEnd, Counterparty, State};
use ibc_handshake_channel_types::events::OpenTry;
use ibc_handshake_channel_types::msgs::MsgChannelOpenTry;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ChannelEndPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::{
    verify_chan_id_unused, verify_connection_open, verify_not_expired, CounterpartyChannel,
};

pub fn chan_open_try_validate<ValCtx>(
    ctx_b: &ValCtx,
    msg: MsgChannelOpenTry,
) -> Result<(), HandlerError>
where
    ValCtx: ValidationContext,
{
    validate(ctx_b, &msg)
}

pub fn chan_open_try_execute<ExecCtx>(
    ctx_b: &mut ExecCtx,
    msg: MsgChannelOpenTry,
) -> Result<(), HandlerError>
where
    ExecCtx: ExecutionContext,
{
    let chan_end_on_b = ChannelEnd::new(
        State::TryOpen,
        msg.ordering,
        Counterparty::new(msg.port_id_on_a.clone(), msg.chan_id_on_a.clone()),
        msg.connection_id_on_b.clone(),
        msg.next_timeout_height,
    );

    // state changes
    {
        let chan_end_path_on_b = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
        ctx_b.store_channel(&chan_end_path_on_b, chan_end_on_b)?;
    }

    // emit events and logs
    {
        ctx_b.log_message(format!(
            "success: channel open try with channel identifier: {}",
            msg.chan_id_on_b
        ))?;

        let core_event = IbcEvent::OpenTryChannel(OpenTry::new(
            msg.port_id_on_b,
            msg.chan_id_on_b,
            msg.port_id_on_a,
            msg.chan_id_on_a,
            msg.connection_id_on_b,
        ));
        ctx_b.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
        ctx_b.emit_ibc_event(core_event)?;
    }

    Ok(())
}

fn validate<Ctx>(ctx_b: &Ctx, msg: &MsgChannelOpenTry) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let conn_end_on_b = verify_connection_open(ctx_b, &msg.connection_id_on_b)?;

    verify_chan_id_unused(ctx_b, &msg.port_id_on_b, &msg.chan_id_on_b, State::TryOpen)?;

    verify_not_expired(ctx_b, &msg.chan_id_on_b, &msg.timeout_height_on_a)?;

    // Verify proofs
    {
        let expected_chan_end_on_a = ChannelEnd::new(
            State::Init,
            // Both ends of a channel must have the same ordering.
            msg.ordering,
            Counterparty::new(msg.port_id_on_b.clone(), msg.chan_id_on_b.clone()),
            conn_end_on_b.counterparty().connection_id().clone(),
            msg.timeout_height_on_a,
        );

        CounterpartyChannel {
            conn_end: &conn_end_on_b,
            port_id: &msg.port_id_on_a,
            chan_id: &msg.chan_id_on_a,
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
