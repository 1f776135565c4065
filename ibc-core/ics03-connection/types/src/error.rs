//! Defines the connection error type

use displaydoc::Display;
use ibc_handshake_client_types::error::ClientError;
use ibc_handshake_client_types::{Height, TimeoutHeight};
use ibc_handshake_host_types::identifiers::ConnectionId;
use ibc_handshake_primitives::prelude::*;

use crate::connection::State;

#[derive(Debug, Display)]
pub enum ConnectionError {
    /// client error: `{0}`
    Client(ClientError),
    /// connection `{connection_id}` not found
    ConnectionNotFound { connection_id: ConnectionId },
    /// connection `{connection_id}` already exists in state `{state}`
    ConnectionAlreadyExists {
        connection_id: ConnectionId,
        state: State,
    },
    /// invalid state of connection `{connection_id}`: expected `{expected}`, actual `{actual}`
    InvalidState {
        connection_id: ConnectionId,
        expected: String,
        actual: State,
    },
    /// handshake step of connection `{connection_id}` expired at `{timeout_height}` (host height `{host_height}`)
    HandshakeExpired {
        connection_id: ConnectionId,
        timeout_height: TimeoutHeight,
        host_height: Height,
    },
    /// connection `{connection_id}` has no pending handshake timeout
    NoPendingTimeout { connection_id: ConnectionId },
    /// timeout of connection `{connection_id}` not reached: proof height `{proof_height}` is not past `{timeout_height}`
    TimeoutNotReached {
        connection_id: ConnectionId,
        proof_height: Height,
        timeout_height: Height,
    },
    /// verifying counterparty state of connection `{connection_id}` failed: `{client_error}`
    VerifyConnectionState {
        connection_id: ConnectionId,
        client_error: ClientError,
    },
}

impl From<ClientError> for ConnectionError {
    fn from(e: ClientError) -> Self {
        Self::Client(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Client(e) => Some(e),
            Self::VerifyConnectionState { client_error, .. } => Some(client_error),
            _ => None,
        }
    }
}
