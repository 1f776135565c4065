use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_core::client::context::consensus_state::ConsensusState;
use ibc_handshake_core::client::types::error::ClientError;
use ibc_handshake_core::commitment_types::commitment::CommitmentRoot;
use ibc_handshake_core::primitives::prelude::*;
use ibc_handshake_core::primitives::{Any, Codec};

use crate::testapp::ibc::clients::mock::header::MockHeader;

pub const MOCK_CONSENSUS_STATE_TYPE_URL: &str = "/ibc.mock.ConsensusState";

/// The consensus state of a mock chain at some height: the root hash of its
/// store, against which proofs taken at that height are checked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MockConsensusState {
    pub root: CommitmentRoot,
}

impl MockConsensusState {
    pub fn new(root: CommitmentRoot) -> Self {
        Self { root }
    }
}

impl From<MockHeader> for MockConsensusState {
    fn from(header: MockHeader) -> Self {
        Self::new(header.root)
    }
}

impl ConsensusState for MockConsensusState {
    fn root(&self) -> &CommitmentRoot {
        &self.root
    }
}

impl TryFrom<Any> for MockConsensusState {
    type Error = ClientError;

    fn try_from(raw: Any) -> Result<Self, Self::Error> {
        raw.verify_type_url(MOCK_CONSENSUS_STATE_TYPE_URL)?;

        let consensus_state = Self::decode_vec(&raw.value)?;

        if consensus_state.root.is_empty() {
            return Err(ClientError::InvalidConsensusState {
                description: "empty commitment root".to_string(),
            });
        }

        Ok(consensus_state)
    }
}

impl From<MockConsensusState> for Any {
    fn from(consensus_state: MockConsensusState) -> Self {
        Any::new(MOCK_CONSENSUS_STATE_TYPE_URL, consensus_state.encode_vec())
    }
}
