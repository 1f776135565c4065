//! Provides utility functions for querying channel states.

use ibc_handshake_core::channel::types::channel::ChannelEnd;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::channel::types::error::ChannelError;
use ibc_handshake_core::host::types::error::HostError;
use ibc_handshake_core::host::types::identifiers::Sequence;
use ibc_handshake_core::host::types::path::{ChannelEndPath, Path, SeqRecvPath, SeqSendPath};
use ibc_handshake_core::host::ValidationContext;
use ibc_handshake_core::primitives::prelude::*;

use super::{
    QueryChannelRequest, QueryChannelResponse, QueryChannelsRequest, QueryChannelsResponse,
    QueryNextSequenceRecvRequest, QueryNextSequenceRecvResponse,
    QueryNextSequenceSendRequest, QueryNextSequenceSendResponse,
};
use crate::core::context::{ProvableContext, QueryContext};
use crate::core::{proof_height, read_committed};
use crate::error::QueryError;
use crate::types::ProvedValue;

/// Reads the sequence counter committed under `path`, failing if the channel
/// has none.
fn read_sequence<I>(
    ibc_ctx: &I,
    prove: bool,
    height: Height,
    path: Path,
) -> Result<ProvedValue<Sequence>, QueryError>
where
    I: ProvableContext,
{
    let description = format!("{path}");

    read_committed(ibc_ctx, prove, height, path)?
        .ok_or_else(|| HostError::missing_data(description).into())
}

/// Queries for a channel by the given port and channel ids and returns the
/// channel end, its availability and, once open, its sequence counters.
pub fn query_channel<I>(
    ibc_ctx: &I,
    request: &QueryChannelRequest,
) -> Result<QueryChannelResponse, QueryError>
where
    I: ValidationContext + ProvableContext,
{
    let proof_height = proof_height(ibc_ctx, &request.location, request.query_height)?;

    let chan_end_path = ChannelEndPath::new(&request.port_id, &request.channel_id);
    let channel: ProvedValue<ChannelEnd> = read_committed(
        ibc_ctx,
        request.prove,
        proof_height,
        Path::ChannelEnd(chan_end_path),
    )?
    .ok_or_else(|| ChannelError::ChannelNotFound {
        port_id: request.port_id.clone(),
        channel_id: request.channel_id.clone(),
    })?;
    let available = channel.value.is_open();

    let (next_sequence_send, next_sequence_recv) = if available {
        let seq_send = read_sequence(
            ibc_ctx,
            request.prove,
            proof_height,
            Path::SeqSend(SeqSendPath::new(&request.port_id, &request.channel_id)),
        )?;
        let seq_recv = read_sequence(
            ibc_ctx,
            request.prove,
            proof_height,
            Path::SeqRecv(SeqRecvPath::new(&request.port_id, &request.channel_id)),
        )?;

        (Some(seq_send), Some(seq_recv))
    } else {
        (None, None)
    };

    Ok(QueryChannelResponse {
        channel,
        available,
        next_sequence_send,
        next_sequence_recv,
        proof_height,
    })
}

/// Queries for all the existing channel ends.
pub fn query_channels<I>(
    ibc_ctx: &I,
    request: &QueryChannelsRequest,
) -> Result<QueryChannelsResponse, QueryError>
where
    I: QueryContext,
{
    let query_height = proof_height(ibc_ctx, &request.location, None)?;

    let channels = ibc_ctx.channel_ends(query_height)?;

    Ok(QueryChannelsResponse::new(channels, query_height))
}

/// Queries for the next send sequence of an open channel.
pub fn query_next_sequence_send<I>(
    ibc_ctx: &I,
    request: &QueryNextSequenceSendRequest,
) -> Result<QueryNextSequenceSendResponse, QueryError>
where
    I: ValidationContext + ProvableContext,
{
    let proof_height = proof_height(ibc_ctx, &request.location, request.query_height)?;

    let next_sequence_send = read_sequence(
        ibc_ctx,
        request.prove,
        proof_height,
        Path::SeqSend(SeqSendPath::new(&request.port_id, &request.channel_id)),
    )?;

    Ok(QueryNextSequenceSendResponse {
        next_sequence_send,
        proof_height,
    })
}

/// Queries for the next receive sequence of an open channel.
pub fn query_next_sequence_recv<I>(
    ibc_ctx: &I,
    request: &QueryNextSequenceRecvRequest,
) -> Result<QueryNextSequenceRecvResponse, QueryError>
where
    I: ValidationContext + ProvableContext,
{
    let proof_height = proof_height(ibc_ctx, &request.location, request.query_height)?;

    let next_sequence_recv = read_sequence(
        ibc_ctx,
        request.prove,
        proof_height,
        Path::SeqRecv(SeqRecvPath::new(&request.port_id, &request.channel_id)),
    )?;

    Ok(QueryNextSequenceRecvResponse {
        next_sequence_recv,
        proof_height,
    })
}
