//! Protocol logic specific to ICS4 messages of type `MsgChannelOpenConfirm`.

use ibc_handshake_channel_types::channel::{ChannelEnd, Counterparty, State};
use ibc_handshake_channel_types::events::OpenConfirm;
use ibc_handshake_channel_types::msgs::MsgChannelOpenConfirm;
use ibc_handshake_client::types::TimeoutHeight;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::events::{IbcEvent, MessageEvent};
use ibc_handshake_host::types::path::ChannelEndPath;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::prelude::*;

use super::sequence::init_sequences;
use super::{verify_connection_open, verify_not_expired, CounterpartyChannel};

pub fn chan_open_confirm_validate<ValCtx>(
    ctx_b: &ValCtx,
    msg: MsgChannelOpenConfirm,
) -> Result<(), HandlerError>
where
    ValCtx: ValidationContext,
{
    validate(ctx_b, &msg)
}

pub fn chan_open_confirm_execute<ExecCtx>(
    ctx_b: &mut ExecCtx,
    msg: MsgChannelOpenConfirm,
) -> Result<(), HandlerError>
where
    ExecCtx: ExecutionContext,
{
    let chan_end_path_on_b = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
    let chan_end_on_b = ctx_b.channel_end(&chan_end_path_on_b)?;

    // state changes
    {
        let chan_end_on_b = {
            let mut chan_end_on_b = chan_end_on_b.clone();
            chan_end_on_b.set_state(State::Open);
            chan_end_on_b.set_next_timeout_height(TimeoutHeight::Never);

            chan_end_on_b
        };
        ctx_b.store_channel(&chan_end_path_on_b, chan_end_on_b)?;

        init_sequences(ctx_b, &msg.port_id_on_b, &msg.chan_id_on_b)?;
    }

    // emit events and logs
    {
        ctx_b.log_message("success: channel open confirm".to_string())?;

        let core_event = {
            let counterparty = chan_end_on_b.counterparty();

            IbcEvent::OpenConfirmChannel(OpenConfirm::new(
                msg.port_id_on_b.clone(),
                msg.chan_id_on_b.clone(),
                counterparty.port_id.clone(),
                counterparty.channel_id.clone(),
                chan_end_on_b.connection_id.clone(),
            ))
        };
        ctx_b.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
        ctx_b.emit_ibc_event(core_event)?;
    }

    Ok(())
}

fn validate<Ctx>(ctx_b: &Ctx, msg: &MsgChannelOpenConfirm) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    // Unwrap the old channel end and validate it against the message.
    let chan_end_path_on_b = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
    let chan_end_on_b = ctx_b.channel_end(&chan_end_path_on_b)?;

    let conn_end_on_b = verify_connection_open(ctx_b, chan_end_on_b.connection_id())?;

    // Validate that the channel end is in a state where it can be confirmed.
    chan_end_on_b.verify_state_matches(&State::TryOpen)?;

    verify_not_expired(ctx_b, &msg.chan_id_on_b, &msg.timeout_height_on_a)?;

    // Verify proofs
    {
        let counterparty = chan_end_on_b.counterparty();

        let expected_chan_end_on_a = ChannelEnd::new(
            State::Open,
            *chan_end_on_b.ordering(),
            Counterparty::new(msg.port_id_on_b.clone(), msg.chan_id_on_b.clone()),
            conn_end_on_b.counterparty().connection_id().clone(),
            msg.timeout_height_on_a,
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
