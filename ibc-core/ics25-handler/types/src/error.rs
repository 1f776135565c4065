//! Defines the top-level handler error and its coarse classification.

use derive_more::From;
use displaydoc::Display;
use ibc_handshake_channel_types::error::ChannelError;
use ibc_handshake_client_types::error::ClientError;
use ibc_handshake_connection_types::error::ConnectionError;
use ibc_handshake_host_types::error::HostError;
use ibc_handshake_primitives::prelude::*;

/// Top-level error
#[derive(Debug, Display, From)]
pub enum HandlerError {
    /// ICS02 Client error: {0}
    Client(ClientError),
    /// ICS03 Connection error: {0}
    Connection(ConnectionError),
    /// ICS04 Channel error: {0}
    Channel(ChannelError),
    /// ICS24 Host error: {0}
    Host(HostError),
}

/// The closed set of outcomes a caller of a handshake step can branch on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    /// A precondition on the current handshake state was violated.
    InvalidState,
    ProofVerificationFailed,
    /// The host height is past the timeout recorded for the step.
    Expired,
    ConnectionNotOpen,
    ChannelNotOpen,
    Other,
}

impl HandlerError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Client(e) => client_error_kind(e),
            Self::Connection(e) => connection_error_kind(e),
            Self::Channel(e) => channel_error_kind(e),
            Self::Host(_) => ErrorKind::Other,
        }
    }
}

fn client_error_kind(e: &ClientError) -> ErrorKind {
    match e {
        ClientError::ClientNotFound { .. } | ClientError::ConsensusStateNotFound { .. } => {
            ErrorKind::NotFound
        }
        ClientError::ClientAlreadyExists { .. } => ErrorKind::AlreadyExists,
        ClientError::InvalidProofHeight { .. }
        | ClientError::MalformedProof { .. }
        | ClientError::MembershipMismatch { .. }
        | ClientError::NonMembershipMismatch { .. } => ErrorKind::ProofVerificationFailed,
        ClientError::InvalidHeaderHeight { .. } => ErrorKind::InvalidState,
        _ => ErrorKind::Other,
    }
}

/// A failed counterparty verification is a proof failure, unless the local
/// client it was checked against does not exist.
fn verification_error_kind(e: &ClientError) -> ErrorKind {
    match e {
        ClientError::ClientNotFound { .. } => ErrorKind::NotFound,
        _ => ErrorKind::ProofVerificationFailed,
    }
}

fn connection_error_kind(e: &ConnectionError) -> ErrorKind {
    match e {
        ConnectionError::Client(e) => client_error_kind(e),
        ConnectionError::ConnectionNotFound { .. } => ErrorKind::NotFound,
        ConnectionError::ConnectionAlreadyExists { .. } => ErrorKind::AlreadyExists,
        ConnectionError::InvalidState { .. }
        | ConnectionError::NoPendingTimeout { .. }
        | ConnectionError::TimeoutNotReached { .. } => ErrorKind::InvalidState,
        ConnectionError::HandshakeExpired { .. } => ErrorKind::Expired,
        ConnectionError::VerifyConnectionState { client_error, .. } => {
            verification_error_kind(client_error)
        }
    }
}

fn channel_error_kind(e: &ChannelError) -> ErrorKind {
    match e {
        ChannelError::Client(e) => client_error_kind(e),
        ChannelError::ChannelNotFound { .. } => ErrorKind::NotFound,
        ChannelError::ChannelAlreadyExists { .. } => ErrorKind::AlreadyExists,
        ChannelError::InvalidState { .. }
        | ChannelError::NoPendingTimeout { .. }
        | ChannelError::TimeoutNotReached { .. }
        | ChannelError::ZeroSequence
        | ChannelError::InvalidSequence { .. } => ErrorKind::InvalidState,
        ChannelError::ConnectionNotOpen { .. } => ErrorKind::ConnectionNotOpen,
        ChannelError::ChannelNotOpen { .. } => ErrorKind::ChannelNotOpen,
        ChannelError::HandshakeExpired { .. } => ErrorKind::Expired,
        ChannelError::VerifyChannelState { client_error, .. } => {
            verification_error_kind(client_error)
        }
        ChannelError::SequenceOverflow => ErrorKind::Other,
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Connection(e) => Some(e),
            Self::Channel(e) => Some(e),
            Self::Host(e) => Some(e),
        }
    }
}
