//! Defines the client error type

use displaydoc::Display;
use ibc_handshake_commitment_types::error::CommitmentError;
use ibc_handshake_host_types::identifiers::ClientId;
use ibc_handshake_primitives::prelude::*;
use ibc_handshake_primitives::DecodingError;

use crate::height::Height;

/// Encodes all the possible client errors
#[derive(Debug, Display)]
pub enum ClientError {
    /// client `{client_id}` not found
    ClientNotFound { client_id: ClientId },
    /// client `{client_id}` already exists
    ClientAlreadyExists { client_id: ClientId },
    /// consensus state of client `{client_id}` not found at height `{height}`
    ConsensusStateNotFound { client_id: ClientId, height: Height },
    /// invalid proof height; proof height `{proof_height}` is ahead of the latest client height `{latest_height}`
    InvalidProofHeight {
        proof_height: Height,
        latest_height: Height,
    },
    /// invalid header height `{header_height}`; must be above the latest client height `{latest_height}`
    InvalidHeaderHeight {
        header_height: Height,
        latest_height: Height,
    },
    /// invalid height; revision height must be non-zero
    InvalidHeight,
    /// height cannot end up zero or negative
    InvalidHeightResult,
    /// invalid client state: `{description}`
    InvalidClientState { description: String },
    /// invalid consensus state: `{description}`
    InvalidConsensusState { description: String },
    /// invalid header: `{description}`
    InvalidHeader { description: String },
    /// malformed commitment proof: `{description}`
    MalformedProof { description: String },
    /// proof does not establish that `{key}` is committed with the expected value
    MembershipMismatch { key: String },
    /// proof does not establish that `{key}` is absent
    NonMembershipMismatch { key: String },
    /// commitment error: `{0}`
    Commitment(CommitmentError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// other error: `{description}`
    Other { description: String },
}

impl From<CommitmentError> for ClientError {
    fn from(e: CommitmentError) -> Self {
        Self::Commitment(e)
    }
}

impl From<DecodingError> for ClientError {
    fn from(e: DecodingError) -> Self {
        Self::Decoding(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Commitment(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
