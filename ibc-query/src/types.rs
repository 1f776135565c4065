use ibc_handshake_core::commitment_types::commitment::CommitmentPrefix;
use ibc_handshake_core::primitives::prelude::*;

use crate::error::QueryError;

pub type Proof = Vec<u8>;

/// Addresses the store a query is served from.
///
/// A store named `ibc` at version 1 commits its values under the prefix
/// `ibc/v1`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreLocation {
    pub store_key: String,
    pub version: u64,
}

impl StoreLocation {
    pub fn new(store_key: impl Into<String>, version: u64) -> Self {
        Self {
            store_key: store_key.into(),
            version,
        }
    }

    pub fn commitment_prefix(&self) -> Result<CommitmentPrefix, QueryError> {
        Ok(CommitmentPrefix::from_store(&self.store_key, self.version)?)
    }
}

/// A queried value, together with its commitment proof when one was asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvedValue<T> {
    pub value: T,
    pub proof: Option<Proof>,
}

impl<T> ProvedValue<T> {
    pub fn new(value: T, proof: Option<Proof>) -> Self {
        Self { value, proof }
    }
}
