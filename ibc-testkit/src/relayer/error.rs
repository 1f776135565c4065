use displaydoc::Display;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::handler::types::error::HandlerError;
use ibc_handshake_core::host::types::identifiers::ClientId;
use ibc_handshake_core::primitives::prelude::*;

#[derive(Debug, Display)]
pub enum RelayerError {
    /// client state on destination chain not found, (client id: `{client_id}`)
    ClientStateNotFound { client_id: ClientId },
    /// the client on destination chain is at a higher height (client id: `{client_id}`, source height: `{source_height}`, dest height: `{destination_height}`)
    ClientAtHigherHeight {
        client_id: ClientId,
        source_height: Height,
        destination_height: Height,
    },
    /// source chain has no header at height `{height}`
    MissingHeader { height: Height },
    /// source chain cannot prove `{path}` at height `{height}`
    MissingProof { path: String, height: Height },
    /// reading the handshake state of a chain failed: `{0}`
    Query(HandlerError),
    /// transaction processing by modules failed error: `{0}`
    TransactionFailed(HandlerError),
}

impl RelayerError {
    /// The handler error behind a failed transaction or read, if any.
    pub fn handler_error(&self) -> Option<&HandlerError> {
        match self {
            Self::Query(e) | Self::TransactionFailed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RelayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Query(e) | Self::TransactionFailed(e) => Some(e),
            _ => None,
        }
    }
}
