use core::fmt::{Display, Error as FmtError, Formatter};

use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_core::client::types::error::ClientError;
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::commitment_types::commitment::CommitmentRoot;
use ibc_handshake_core::primitives::prelude::*;
use ibc_handshake_core::primitives::{Any, Codec};

pub const MOCK_HEADER_TYPE_URL: &str = "/ibc.mock.Header";

/// A block header of a mock chain: its height and the root of its store.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MockHeader {
    pub height: Height,
    pub root: CommitmentRoot,
}

impl MockHeader {
    pub fn new(height: Height, root: CommitmentRoot) -> Self {
        Self { height, root }
    }

    pub fn height(&self) -> Height {
        self.height
    }
}

impl Display for MockHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "MockHeader {{ height: {} }}", self.height)
    }
}

impl TryFrom<Any> for MockHeader {
    type Error = ClientError;

    fn try_from(raw: Any) -> Result<Self, Self::Error> {
        raw.verify_type_url(MOCK_HEADER_TYPE_URL)?;

        Ok(Self::decode_vec(&raw.value)?)
    }
}

impl From<MockHeader> for Any {
    fn from(header: MockHeader) -> Self {
        Any::new(MOCK_HEADER_TYPE_URL, header.encode_vec())
    }
}
