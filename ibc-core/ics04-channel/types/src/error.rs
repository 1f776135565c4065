//! Defines the main channel error types.

use displaydoc::Display;
use ibc_handshake_client_types::error::ClientError;
use ibc_handshake_client_types::{Height, TimeoutHeight};
use ibc_handshake_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_handshake_primitives::prelude::*;

use crate::channel::State;

#[derive(Debug, Display)]
pub enum ChannelError {
    /// client error: `{0}`
    Client(ClientError),
    /// channel `{channel_id}` on port `{port_id}` not found
    ChannelNotFound {
        port_id: PortId,
        channel_id: ChannelId,
    },
    /// channel `{channel_id}` on port `{port_id}` already exists in state `{state}`
    ChannelAlreadyExists {
        port_id: PortId,
        channel_id: ChannelId,
        state: State,
    },
    /// invalid channel state: expected `{expected}`, actual `{actual}`
    InvalidState { expected: String, actual: State },
    /// connection `{connection_id}` is not open
    ConnectionNotOpen { connection_id: ConnectionId },
    /// channel `{channel_id}` on port `{port_id}` is not open
    ChannelNotOpen {
        port_id: PortId,
        channel_id: ChannelId,
    },
    /// handshake step of channel `{channel_id}` expired at `{timeout_height}` (host height `{host_height}`)
    HandshakeExpired {
        channel_id: ChannelId,
        timeout_height: TimeoutHeight,
        host_height: Height,
    },
    /// channel `{channel_id}` has no pending handshake timeout
    NoPendingTimeout { channel_id: ChannelId },
    /// timeout of channel `{channel_id}` not reached: proof height `{proof_height}` is not past `{timeout_height}`
    TimeoutNotReached {
        channel_id: ChannelId,
        proof_height: Height,
        timeout_height: Height,
    },
    /// verifying counterparty state of channel `{channel_id}` failed: `{client_error}`
    VerifyChannelState {
        channel_id: ChannelId,
        client_error: ClientError,
    },
    /// sequence number must be non-zero
    ZeroSequence,
    /// invalid sequence `{actual}`; expected `{expected}`
    InvalidSequence { expected: Sequence, actual: Sequence },
    /// sequence counter overflowed
    SequenceOverflow,
}

impl From<ClientError> for ChannelError {
    fn from(e: ClientError) -> Self {
        Self::Client(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Client(e) => Some(e),
            Self::VerifyChannelState { client_error, .. } => Some(client_error),
            _ => None,
        }
    }
}
