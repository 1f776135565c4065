//! Protocol logic specific to ICS4 messages of type `MsgChannelOpenAck`.

use ibc_handshake_channel_types::channel::{ChannelEnd, Counterparty, State};
use ibc_handshake_channel_types::events::OpenAck;
use ibc_handshake_channel_types::msgs::MsgChannelOpenAck;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ChannelEndPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::sequence::init_sequences;
use super::{verify_connection_open, verify_not_expired, CounterpartyChannel};

pub fn chan_open_ack_validate<ValCtx>(
    ctx_a: &ValCtx,
    msg: MsgChannelOpenAck,
) -> Result<(), HandlerError>
where
    ValCtx: ValidationContext,
{
    validate(ctx_a, &msg)
}

pub fn chan_open_ack_execute<ExecCtx>(
    ctx_a: &mut ExecCtx,
    msg: MsgChannelOpenAck,
) -> Result<(), HandlerError>
where
    ExecCtx: ExecutionContext,
{
    let chan_end_path_on_a = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
    let chan_end_on_a = ctx_a.channel_end(&chan_end_path_on_a)?;

    // state changes
    {
        let chan_end_on_a = {
            let mut chan_end_on_a = chan_end_on_a.clone();

            chan_end_on_a.set_state(State::Open);
            chan_end_on_a.set_next_timeout_height(msg.next_timeout_height);

            chan_end_on_a
        };
        ctx_a.store_channel(&chan_end_path_on_a, chan_end_on_a)?;

        init_sequences(ctx_a, &msg.port_id_on_a, &msg.chan_id_on_a)?;
    }

    // emit events and logs
    {
        ctx_a.log_message("success: channel open ack".to_string())?;

        let core_event = {
            let counterparty = chan_end_on_a.counterparty();

            IbcEvent::OpenAckChannel(OpenAck::new(
                msg.port_id_on_a.clone(),
                msg.chan_id_on_a.clone(),
                counterparty.port_id.clone(),
                counterparty.channel_id.clone(),
                chan_end_on_a.connection_id.clone(),
            ))
        };
        ctx_a.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
        ctx_a.emit_ibc_event(core_event)?;
    }

    Ok(())
}

fn validate<Ctx>(ctx_a: &Ctx, msg: &MsgChannelOpenAck) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    let chan_end_path_on_a = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
    let chan_end_on_a = ctx_a.channel_end(&chan_end_path_on_a)?;

    // An OPEN connection running on the local (host) chain should exist.
    let conn_end_on_a = verify_connection_open(ctx_a, chan_end_on_a.connection_id())?;

    // Validate that the channel end is in a state where it can be ack.
    chan_end_on_a.verify_state_matches(&State::Init)?;

    verify_not_expired(ctx_a, &msg.chan_id_on_a, &msg.timeout_height_on_b)?;

    // Verify proofs
    {
        let counterparty = chan_end_on_a.counterparty();

        let expected_chan_end_on_b = ChannelEnd::new(
            State::TryOpen,
            // Both ends of a channel must have the same ordering, so it's
            // fine to use A's ordering here
            *chan_end_on_a.ordering(),
            Counterparty::new(msg.port_id_on_a.clone(), msg.chan_id_on_a.clone()),
            conn_end_on_a.counterparty().connection_id().clone(),
            msg.timeout_height_on_b,
        );

        CounterpartyChannel {
            conn_end: &conn_end_on_a,
            port_id: counterparty.port_id(),
            chan_id: counterparty.channel_id(),
        }
        .verify(
            ctx_a,
            &msg.chan_id_on_a,
            msg.proof_height_on_b,
            &msg.proof_chan_end_on_b,
            Some(&expected_chan_end_on_b),
        )?;
    }

    Ok(())
}
