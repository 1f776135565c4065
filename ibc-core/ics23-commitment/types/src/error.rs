//! Defines the commitment error type

use displaydoc::Display;
use ibc_handshake_primitives::prelude::*;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum CommitmentError {
    /// empty commitment prefix
    EmptyCommitmentPrefix,
    /// invalid commitment prefix segment `{0}`; segments must be non-empty and contain no `/`
    InvalidPrefixSegment(String),
    /// empty merkle proof
    EmptyMerkleProof,
    /// empty merkle root
    EmptyMerkleRoot,
}

#[cfg(feature = "std")]
impl std::error::Error for CommitmentError {}
