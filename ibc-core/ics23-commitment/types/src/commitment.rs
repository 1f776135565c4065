//! Defines core commitment types

use core::fmt;
use core::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_primitives::prelude::*;

use crate::error::CommitmentError;
use crate::merkle::MerklePath;

const PREFIX_SEPARATOR: char = '/';

/// The root of a chain's state commitment at some height, as recorded by a
/// light client's consensus state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CommitmentRoot {
    bytes: Vec<u8>,
}

impl fmt::Debug for CommitmentRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommitmentRoot")
            .field(&hex::encode_upper(&self.bytes))
            .finish()
    }
}

impl CommitmentRoot {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Vec::from(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for CommitmentRoot {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// Opaque proof bytes relayed from a counterparty. Only the light client
/// that checks them knows their format.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(
    Clone, PartialEq, Eq, derive_more::AsRef, derive_more::Into, BorshSerialize, BorshDeserialize,
)]
#[as_ref(forward)]
pub struct CommitmentProofBytes {
    bytes: Vec<u8>,
}

impl fmt::Debug for CommitmentProofBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommitmentProof")
            .field(&hex::encode_upper(&self.bytes))
            .finish()
    }
}

impl TryFrom<Vec<u8>> for CommitmentProofBytes {
    type Error = CommitmentError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.is_empty() {
            Err(Self::Error::EmptyMerkleProof)
        } else {
            Ok(Self { bytes })
        }
    }
}

/// The ordered path segments naming the key namespace under which a chain
/// commits its handshake state, e.g. `["ibc", "v1"]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct CommitmentPrefix {
    segments: Vec<String>,
}

impl CommitmentPrefix {
    pub fn new<I, S>(segments: I) -> Result<Self, CommitmentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();

        if segments.is_empty() {
            return Err(CommitmentError::EmptyCommitmentPrefix);
        }

        if let Some(segment) = segments
            .iter()
            .find(|s| s.is_empty() || s.contains(PREFIX_SEPARATOR))
        {
            return Err(CommitmentError::InvalidPrefixSegment(segment.clone()));
        }

        Ok(Self { segments })
    }

    /// Builds the prefix addressing the `v{version}` namespace of the named store.
    pub fn from_store(store_key: &str, version: u64) -> Result<Self, CommitmentError> {
        Self::new([store_key.to_string(), format!("v{version}")])
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Appends `path` to the prefix, producing the full key a proof is checked against.
    pub fn apply(&self, path: String) -> MerklePath {
        let mut key_path = self.segments.clone();
        key_path.push(path);
        MerklePath { key_path }
    }
}

impl fmt::Debug for CommitmentPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommitmentPrefix").field(&self.to_string()).finish()
    }
}

impl fmt::Display for CommitmentPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl FromStr for CommitmentPrefix {
    type Err = CommitmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split(PREFIX_SEPARATOR))
    }
}
