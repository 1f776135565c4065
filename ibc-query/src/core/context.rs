//! Required traits for the [`query functions`](crate::core).

use ibc_handshake_core::channel::types::channel::IdentifiedChannelEnd;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::connection::types::IdentifiedConnectionEnd;
use ibc_handshake_core::handler::types::error::HandlerError;
use ibc_handshake_core::host::types::path::Path;
use ibc_handshake_core::host::ValidationContext;
use ibc_handshake_core::primitives::prelude::*;

/// Context to be implemented by the host to serve committed values and their
/// proofs in query responses.
pub trait ProvableContext {
    /// Returns the encoded value committed under `path` in the block at
    /// `height`, or `None` if that block holds nothing there.
    fn get_value(&self, height: Height, path: &Path) -> Option<Vec<u8>>;

    /// Returns the proof for the given path at the given height, under the
    /// host's commitment prefix.
    fn get_proof(&self, height: Height, path: &Path) -> Option<Vec<u8>>;
}

/// Context to be implemented by the host that serves the listing queries.
pub trait QueryContext: ProvableContext + ValidationContext {
    /// Returns every connection end committed in the block at `height`.
    fn connection_ends(&self, height: Height)
        -> Result<Vec<IdentifiedConnectionEnd>, HandlerError>;

    /// Returns every channel end committed in the block at `height`.
    fn channel_ends(&self, height: Height) -> Result<Vec<IdentifiedChannelEnd>, HandlerError>;
}
