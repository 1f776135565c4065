use ibc_handshake_core::channel::types::channel::{ChannelEnd, IdentifiedChannelEnd};
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::connection::types::{ConnectionEnd, IdentifiedConnectionEnd};
use ibc_handshake_core::handler::types::error::HandlerError;
use ibc_handshake_core::host::types::error::HostError;
use ibc_handshake_core::host::types::path::{ChannelEndPath, ConnectionPath, Path};
use ibc_handshake_core::primitives::prelude::*;
use ibc_handshake_core::primitives::Codec;
use ibc_handshake_query::core::context::{ProvableContext, QueryContext};

use crate::testapp::ibc::core::types::MockContext;
use crate::testapp::store::StoreHeight;

impl MockContext {
    /// Reads the value committed under `path` in the block at `height`.
    fn read_committed<T: Codec>(
        &self,
        height: Height,
        path: impl Into<Path>,
    ) -> Result<Option<T>, HostError> {
        self.get_value(height, &path.into())
            .map(|bytes| T::decode_vec(&bytes))
            .transpose()
            .map_err(HostError::from)
    }
}

impl ProvableContext for MockContext {
    fn get_value(&self, height: Height, path: &Path) -> Option<Vec<u8>> {
        let key = self.store_key(path.clone());

        self.ibc_store
            .store
            .get(StoreHeight::Stable(height.revision_height()), &key)
    }

    fn get_proof(&self, height: Height, path: &Path) -> Option<Vec<u8>> {
        let key = self.store_key(path.clone());

        self.ibc_store
            .store
            .get_proof(StoreHeight::Stable(height.revision_height()), &key)
            .map(|proof| proof.encode_vec())
    }
}

impl QueryContext for MockContext {
    fn connection_ends(
        &self,
        height: Height,
    ) -> Result<Vec<IdentifiedConnectionEnd>, HandlerError> {
        let mut connections = Vec::new();

        for conn_id in &self.ibc_store.connection_ids {
            let conn_end: Option<ConnectionEnd> =
                self.read_committed(height, ConnectionPath::new(conn_id))?;

            if let Some(conn_end) = conn_end {
                connections.push(IdentifiedConnectionEnd::new(conn_id.clone(), conn_end));
            }
        }

        Ok(connections)
    }

    fn channel_ends(&self, height: Height) -> Result<Vec<IdentifiedChannelEnd>, HandlerError> {
        let mut channels = Vec::new();

        for (port_id, channel_id) in &self.ibc_store.channel_ids {
            let chan_end: Option<ChannelEnd> =
                self.read_committed(height, ChannelEndPath::new(port_id, channel_id))?;

            if let Some(chan_end) = chan_end {
                channels.push(IdentifiedChannelEnd::new(
                    port_id.clone(),
                    channel_id.clone(),
                    chan_end,
                ));
            }
        }

        Ok(channels)
    }
}
