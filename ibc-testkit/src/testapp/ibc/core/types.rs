//! Implementation of a global context mock. Used in testing handlers of all
//! handshake modules.

use alloc::collections::BTreeSet;

use ibc_handshake_core::channel::types::channel::ChannelEnd;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::commitment_types::commitment::{
    CommitmentPrefix, CommitmentProofBytes, CommitmentRoot,
};
use ibc_handshake_core::connection::types::ConnectionEnd;
use ibc_handshake_core::entrypoint::dispatch;
use ibc_handshake_core::handler::types::events::IbcEvent;
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::error::HostError;
use ibc_handshake_core::host::types::identifiers::{
    ChannelId, ClientId, ConnectionId, PortId, Sequence,
};
use ibc_handshake_core::host::types::path::{
    ChannelEndPath, ClientConsensusStatePath, ClientStatePath, ConnectionPath, Path, SeqRecvPath,
    SeqSendPath,
};
use ibc_handshake_core::primitives::prelude::*;
use ibc_handshake_core::primitives::{Any, Codec};
use tracing::debug;

use crate::fixtures::core::context::MockContextConfig;
use crate::relayer::error::RelayerError;
use crate::testapp::ibc::clients::mock::client_state::MockClientState;
use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::clients::mock::header::MockHeader;
use crate::testapp::store::{MerkleStore, StoreHeight};

/// An object that stores all handshake related data.
///
/// Every record lives in the Merkle store, under the commitment prefix of the
/// chain. The identifier sets only index what the store holds, for listing.
#[derive(Clone, Debug, Default)]
pub struct MockIbcStore {
    /// Versioned store every record is committed to.
    pub store: MerkleStore,

    /// Identifiers of all the connections in the store.
    pub connection_ids: BTreeSet<ConnectionId>,

    /// Port and channel identifiers of all the channels in the store.
    pub channel_ids: BTreeSet<(PortId, ChannelId)>,

    /// Emitted events in order
    pub events: Vec<IbcEvent>,

    /// Logs of the handshake modules
    pub logs: Vec<String>,
}

/// A mock chain implementing every context the handshake handlers need.
///
/// Handlers read and write the pending block; [`MockContext::advance_block`]
/// commits it, after which values become provable at the new height.
#[derive(Clone, Debug)]
pub struct MockContext {
    /// Name of the chain, for logs only.
    pub chain_name: String,

    /// Prefix under which the chain commits its records.
    pub commitment_prefix: CommitmentPrefix,

    /// An object that stores all handshake related data.
    pub ibc_store: MockIbcStore,
}

/// Returns a MockContext with bare minimum initialization: no clients, no
/// connections and no channels are present, and the chain has Height(5).
impl Default for MockContext {
    fn default() -> Self {
        MockContextConfig::builder().build()
    }
}

impl MockContext {
    pub(crate) fn new(chain_name: String, commitment_prefix: CommitmentPrefix) -> Self {
        Self {
            chain_name,
            commitment_prefix,
            ibc_store: MockIbcStore::default(),
        }
    }

    /// The store key of `path` under the commitment prefix of this chain.
    pub fn store_key(&self, path: impl Into<Path>) -> Vec<u8> {
        self.commitment_prefix
            .apply(path.into().to_string())
            .to_key()
    }

    pub(crate) fn read<T: Codec>(&self, path: impl Into<Path>) -> Result<Option<T>, HostError> {
        let key = self.store_key(path);

        self.ibc_store
            .store
            .get(StoreHeight::Pending, &key)
            .map(|bytes| T::decode_vec(&bytes))
            .transpose()
            .map_err(HostError::from)
    }

    pub(crate) fn write<T: Codec>(&mut self, path: impl Into<Path>, value: &T) {
        let key = self.store_key(path);
        self.ibc_store.store.set(key, value.encode_vec());
    }

    /// Height of the latest committed block.
    ///
    /// Construction commits the genesis block, so the height is at least 1.
    pub fn latest_height(&self) -> Height {
        Height::min(0).add(self.ibc_store.store.current_height().saturating_sub(1))
    }

    /// Root hash of the store at the committed `height`.
    pub fn root_at(&self, height: Height) -> Option<CommitmentRoot> {
        self.ibc_store
            .store
            .root_hash(StoreHeight::Stable(height.revision_height()))
            .map(|root| CommitmentRoot::from_bytes(&root))
    }

    /// The header a client of this chain is updated with to reach `height`.
    pub fn header_at(&self, height: Height) -> Option<MockHeader> {
        self.root_at(height)
            .map(|root| MockHeader::new(height, root))
    }

    /// The header of the latest committed block.
    pub fn latest_header(&self) -> Option<MockHeader> {
        self.header_at(self.latest_height())
    }

    /// Commits the pending block, returning the height of the new block.
    pub fn advance_block(&mut self) -> Height {
        let root = self.ibc_store.store.commit();
        let height = self.latest_height();

        debug!(
            chain = %self.chain_name,
            %height,
            root = ?CommitmentRoot::from_bytes(&root),
            "advanced block"
        );

        height
    }

    /// Commits blocks until the chain reaches `target_height`.
    pub fn advance_block_up_to_height(mut self, target_height: Height) -> Self {
        while self.ibc_store.store.current_height() < target_height.revision_height() {
            self.advance_block();
        }
        self
    }

    /// Proves the presence or absence of the value under `path` at the
    /// committed `height`.
    pub fn prove(&self, height: Height, path: impl Into<Path>) -> Option<CommitmentProofBytes> {
        let key = self.store_key(path);

        self.ibc_store
            .store
            .get_proof(StoreHeight::Stable(height.revision_height()), &key)
            .and_then(|proof| CommitmentProofBytes::try_from(proof.encode_vec()).ok())
    }

    /// Registers a mock client tracking the chain whose block `header` is,
    /// as if it had been created with that header's height and root.
    pub fn with_client(mut self, client_id: &ClientId, header: MockHeader) -> Self {
        let height = header.height();

        self.write(
            ClientStatePath::new(client_id.clone()),
            &Any::from(MockClientState::new(height)),
        );
        self.write(
            ClientConsensusStatePath::new(
                client_id.clone(),
                height.revision_number(),
                height.revision_height(),
            ),
            &Any::from(MockConsensusState::from(header)),
        );
        self
    }

    /// Associates a connection to this context.
    pub fn with_connection(
        mut self,
        connection_id: ConnectionId,
        connection_end: ConnectionEnd,
    ) -> Self {
        self.write(ConnectionPath::new(&connection_id), &connection_end);
        self.ibc_store.connection_ids.insert(connection_id);
        self
    }

    /// Associates a channel (in an arbitrary state) to this context.
    pub fn with_channel(
        mut self,
        port_id: PortId,
        chan_id: ChannelId,
        channel_end: ChannelEnd,
    ) -> Self {
        self.write(ChannelEndPath::new(&port_id, &chan_id), &channel_end);
        self.ibc_store.channel_ids.insert((port_id, chan_id));
        self
    }

    pub fn with_send_sequence(
        mut self,
        port_id: PortId,
        chan_id: ChannelId,
        seq_number: Sequence,
    ) -> Self {
        self.write(SeqSendPath::new(&port_id, &chan_id), &seq_number);
        self
    }

    pub fn with_recv_sequence(
        mut self,
        port_id: PortId,
        chan_id: ChannelId,
        seq_number: Sequence,
    ) -> Self {
        self.write(SeqRecvPath::new(&port_id, &chan_id), &seq_number);
        self
    }

    /// A datagram passes from the relayer to the handshake modules of this
    /// chain, and the resulting state is committed in a new block.
    pub fn deliver(&mut self, msg: MsgEnvelope) -> Result<Height, RelayerError> {
        dispatch(self, msg).map_err(RelayerError::TransactionFailed)?;
        Ok(self.advance_block())
    }

    pub fn get_events(&self) -> Vec<IbcEvent> {
        self.ibc_store.events.clone()
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.ibc_store.logs.clone()
    }
}
