use alloc::string::{String, ToString};

use displaydoc::Display;
use ibc_handshake_core::channel::types::error::ChannelError;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::commitment_types::commitment::CommitmentPrefix;
use ibc_handshake_core::commitment_types::error::CommitmentError;
use ibc_handshake_core::connection::types::error::ConnectionError;
use ibc_handshake_core::handler::types::error::HandlerError;
use ibc_handshake_core::host::types::error::HostError;

/// The main error type of the ibc-handshake-query crate. This type mainly
/// serves to surface lower-level errors that occur when executing the
/// query codepaths.
#[derive(Debug, Display)]
pub enum QueryError {
    /// handler error: `{0}`
    Handler(HandlerError),
    /// host error: `{0}`
    Host(HostError),
    /// invalid store location: `{0}`
    InvalidStoreLocation(CommitmentError),
    /// unknown store: host commits under `{expected}`, query addressed `{actual}`
    UnknownStore {
        expected: CommitmentPrefix,
        actual: CommitmentPrefix,
    },
    /// query height `{query_height}` is ahead of the latest committed height `{latest_height}`
    UncommittedHeight {
        query_height: Height,
        latest_height: Height,
    },
    /// missing proof: `{0}`
    MissingProof(String),
}

impl QueryError {
    pub fn missing_proof<T: ToString>(description: T) -> Self {
        Self::MissingProof(description.to_string())
    }
}

impl From<HandlerError> for QueryError {
    fn from(e: HandlerError) -> Self {
        Self::Handler(e)
    }
}

impl From<ConnectionError> for QueryError {
    fn from(e: ConnectionError) -> Self {
        Self::Handler(HandlerError::Connection(e))
    }
}

impl From<ChannelError> for QueryError {
    fn from(e: ChannelError) -> Self {
        Self::Handler(HandlerError::Channel(e))
    }
}

impl From<HostError> for QueryError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<CommitmentError> for QueryError {
    fn from(e: CommitmentError) -> Self {
        Self::InvalidStoreLocation(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Handler(e) => Some(e),
            Self::Host(e) => Some(e),
            Self::InvalidStoreLocation(e) => Some(e),
            _ => None,
        }
    }
}
