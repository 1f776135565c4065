use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_core::client::context::prelude::*;
use ibc_handshake_core::client::types::error::ClientError;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::commitment_types::commitment::{
    CommitmentPrefix, CommitmentProofBytes, CommitmentRoot,
};
use ibc_handshake_core::host::types::identifiers::ClientId;
use ibc_handshake_core::host::types::path::{ClientConsensusStatePath, ClientStatePath, Path};
use ibc_handshake_core::primitives::prelude::*;
use ibc_handshake_core::primitives::{Any, Codec};

use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::clients::mock::header::MockHeader;
use crate::testapp::store::MerkleProof;

pub const MOCK_CLIENT_STATE_TYPE_URL: &str = "/ibc.mock.ClientState";

/// A client of a mock chain, tracking nothing but the latest height it was
/// updated to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MockClientState {
    pub latest_height: Height,
}

impl MockClientState {
    pub fn new(latest_height: Height) -> Self {
        Self { latest_height }
    }
}

impl TryFrom<Any> for MockClientState {
    type Error = ClientError;

    fn try_from(raw: Any) -> Result<Self, Self::Error> {
        raw.verify_type_url(MOCK_CLIENT_STATE_TYPE_URL)?;

        Ok(Self::decode_vec(&raw.value)?)
    }
}

impl From<MockClientState> for Any {
    fn from(client_state: MockClientState) -> Self {
        Any::new(MOCK_CLIENT_STATE_TYPE_URL, client_state.encode_vec())
    }
}

fn decode_proof(proof: &CommitmentProofBytes) -> Result<MerkleProof, ClientError> {
    MerkleProof::decode_vec(proof.as_ref()).map_err(|e| ClientError::MalformedProof {
        description: e.to_string(),
    })
}

fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}

impl ClientStateCommon for MockClientState {
    fn verify_consensus_state(&self, consensus_state: Any) -> Result<(), ClientError> {
        let _mock_consensus_state = MockConsensusState::try_from(consensus_state)?;

        Ok(())
    }

    fn latest_height(&self) -> Height {
        self.latest_height
    }

    fn verify_membership(
        &self,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProofBytes,
        root: &CommitmentRoot,
        path: Path,
        value: Vec<u8>,
    ) -> Result<(), ClientError> {
        let key = prefix.apply(path.to_string()).to_key();

        match decode_proof(proof)? {
            MerkleProof::Exist(proof)
                if proof.key == key && proof.value == value && proof.verify(root.as_bytes()) =>
            {
                Ok(())
            }
            _ => Err(ClientError::MembershipMismatch {
                key: display_key(&key),
            }),
        }
    }

    fn verify_non_membership(
        &self,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProofBytes,
        root: &CommitmentRoot,
        path: Path,
    ) -> Result<(), ClientError> {
        let key = prefix.apply(path.to_string()).to_key();

        match decode_proof(proof)? {
            MerkleProof::NonExist(proof) if proof.verify(root.as_bytes(), &key) => Ok(()),
            _ => Err(ClientError::NonMembershipMismatch {
                key: display_key(&key),
            }),
        }
    }
}

impl<V> ClientStateValidation<V> for MockClientState
where
    V: ClientValidationContext,
{
    fn verify_client_message(
        &self,
        _ctx: &V,
        _client_id: &ClientId,
        client_message: Any,
    ) -> Result<(), ClientError> {
        let header = MockHeader::try_from(client_message)?;

        if header.height() <= self.latest_height {
            return Err(ClientError::InvalidHeaderHeight {
                header_height: header.height(),
                latest_height: self.latest_height,
            });
        }

        if header.root.is_empty() {
            return Err(ClientError::InvalidHeader {
                description: "empty commitment root".to_string(),
            });
        }

        Ok(())
    }
}

impl<E> ClientStateExecution<E> for MockClientState
where
    E: ClientExecutionContext,
    E::ClientStateRef: From<MockClientState>,
    E::ConsensusStateRef: From<MockConsensusState>,
{
    fn initialise(
        &self,
        ctx: &mut E,
        client_id: &ClientId,
        consensus_state: Any,
    ) -> Result<(), ClientError> {
        let mock_consensus_state = MockConsensusState::try_from(consensus_state)?;

        ctx.store_client_state(ClientStatePath::new(client_id.clone()), (*self).into())?;
        ctx.store_consensus_state(
            ClientConsensusStatePath::new(
                client_id.clone(),
                self.latest_height.revision_number(),
                self.latest_height.revision_height(),
            ),
            mock_consensus_state.into(),
        )?;

        Ok(())
    }

    fn update_state(
        &self,
        ctx: &mut E,
        client_id: &ClientId,
        header: Any,
    ) -> Result<Height, ClientError> {
        let header = MockHeader::try_from(header)?;
        let header_height = header.height();

        let new_client_state = MockClientState::new(header_height);
        let new_consensus_state = MockConsensusState::from(header);

        ctx.store_consensus_state(
            ClientConsensusStatePath::new(
                client_id.clone(),
                header_height.revision_number(),
                header_height.revision_height(),
            ),
            new_consensus_state.into(),
        )?;
        ctx.store_client_state(
            ClientStatePath::new(client_id.clone()),
            new_client_state.into(),
        )?;

        Ok(header_height)
    }
}
