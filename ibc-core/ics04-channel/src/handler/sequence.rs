//! Send and receive sequence counters of open channels.
//!
//! Both counters are written as 1 the first time a channel opens and are kept
//! as they are when a closed channel is opened again. The send counter
//! strictly increases with every [`send_next_sequence`]; the receive counter
//! never decreases.

use core::cmp::max;

use ibc_handshake_channel_types::channel::{ChannelEnd, Order};
use ibc_handshake_channel_types::error::ChannelError;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_host::types::identifiers::{ChannelId, PortId, Sequence};
use ibc_handshake_host::types::path::{ChannelEndPath, SeqRecvPath, SeqSendPath};
use ibc_handshake_host::{ExecutionContext, ValidationContext};

/// Writes the counters of a channel that has just opened, unless an earlier
/// opening already did.
pub(crate) fn init_sequences<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    chan_id: &ChannelId,
) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    let seq_send_path = SeqSendPath::new(port_id, chan_id);
    if ctx.query_next_sequence_send(&seq_send_path)?.is_none() {
        ctx.store_next_sequence_send(&seq_send_path, Sequence::first())?;
    }

    let seq_recv_path = SeqRecvPath::new(port_id, chan_id);
    if ctx.query_next_sequence_recv(&seq_recv_path)?.is_none() {
        ctx.store_next_sequence_recv(&seq_recv_path, Sequence::first())?;
    }

    Ok(())
}

/// Returns the channel end, failing with `ChannelNotOpen` unless it is open.
fn open_channel_end<Ctx>(
    ctx: &Ctx,
    port_id: &PortId,
    chan_id: &ChannelId,
) -> Result<ChannelEnd, HandlerError>
where
    Ctx: ValidationContext,
{
    match ctx.query_channel_end(&ChannelEndPath::new(port_id, chan_id))? {
        Some(chan_end) if chan_end.is_open() => Ok(chan_end),
        _ => Err(ChannelError::ChannelNotOpen {
            port_id: port_id.clone(),
            channel_id: chan_id.clone(),
        }
        .into()),
    }
}

/// Assigns the next outgoing sequence number of an open channel.
///
/// Returns the current value of the send counter and stores its successor.
pub fn send_next_sequence<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    chan_id: &ChannelId,
) -> Result<Sequence, HandlerError>
where
    Ctx: ExecutionContext,
{
    open_channel_end(ctx, port_id, chan_id)?;

    let seq_send_path = SeqSendPath::new(port_id, chan_id);
    let sequence = ctx.get_next_sequence_send(&seq_send_path)?;
    let next = sequence
        .checked_increment()
        .ok_or(ChannelError::SequenceOverflow)?;

    ctx.store_next_sequence_send(&seq_send_path, next)?;

    Ok(sequence)
}

/// Records the receipt of `sequence` on an open channel and returns the new
/// value of the receive counter.
pub fn advance_sequence_recv<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    chan_id: &ChannelId,
    sequence: Sequence,
) -> Result<Sequence, HandlerError>
where
    Ctx: ExecutionContext,
{
    let chan_end = open_channel_end(ctx, port_id, chan_id)?;

    let seq_recv_path = SeqRecvPath::new(port_id, chan_id);
    let current = ctx.get_next_sequence_recv(&seq_recv_path)?;
    let next = next_sequence_recv(*chan_end.ordering(), current, sequence)?;

    ctx.store_next_sequence_recv(&seq_recv_path, next)?;

    Ok(next)
}

/// Computes the receive counter after `sequence` arrives on a channel whose
/// counter is at `current`.
///
/// Ordered channels accept exactly `current`. Unordered channels keep the
/// highest mark seen, so the counter never moves backwards.
fn next_sequence_recv(
    ordering: Order,
    current: Sequence,
    sequence: Sequence,
) -> Result<Sequence, ChannelError> {
    if sequence.is_zero() {
        return Err(ChannelError::ZeroSequence);
    }

    if ordering == Order::Ordered && sequence != current {
        return Err(ChannelError::InvalidSequence {
            expected: current,
            actual: sequence,
        });
    }

    let successor = sequence
        .checked_increment()
        .ok_or(ChannelError::SequenceOverflow)?;

    Ok(max(current, successor))
}
