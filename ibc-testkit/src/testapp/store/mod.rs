//! A versioned in-memory key-value store committing every block to a
//! sorted-leaf Merkle tree.
//!
//! Writes land in a pending state; [`MerkleStore::commit`] freezes it as the
//! next block. Proofs are only served for committed blocks.

mod proof;

use alloc::collections::BTreeMap;
use core::fmt::{Display, Formatter};

use ibc_handshake_core::primitives::prelude::*;
pub use proof::*;
use tracing::trace;

/// Block height
pub type RawHeight = u64;

/// Store height to query
#[derive(Debug, Copy, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub enum StoreHeight {
    Pending,
    Latest,
    Stable(RawHeight),
}

impl Display for StoreHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Latest => write!(f, "latest"),
            Self::Stable(height) => write!(f, "{height}"),
        }
    }
}

impl From<RawHeight> for StoreHeight {
    fn from(value: RawHeight) -> Self {
        match value {
            0 => Self::Latest,
            _ => Self::Stable(value),
        }
    }
}

type State = BTreeMap<Vec<u8>, Vec<u8>>;

/// An in-memory store keeping the state of every committed block.
#[derive(Clone, Debug, Default)]
pub struct MerkleStore {
    /// collection of states corresponding to every committed block height
    committed: Vec<State>,
    /// pending block state
    pending: State,
}

impl MerkleStore {
    fn get_state(&self, height: StoreHeight) -> Option<&State> {
        match height {
            StoreHeight::Pending => Some(&self.pending),
            StoreHeight::Latest => self.committed.last(),
            StoreHeight::Stable(height) => usize::try_from(height)
                .ok()
                .and_then(|h| h.checked_sub(1))
                .and_then(|h| self.committed.get(h)),
        }
    }

    /// Sets `value` for `key` in the pending block, returning the previous value.
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Option<Vec<u8>> {
        trace!(key = %String::from_utf8_lossy(&key), "set");
        self.pending.insert(key, value)
    }

    pub fn get(&self, height: StoreHeight, key: &[u8]) -> Option<Vec<u8>> {
        self.get_state(height).and_then(|state| state.get(key).cloned())
    }

    /// Returns all pending keys starting with `key_prefix`, in order.
    pub fn get_keys(&self, key_prefix: &[u8]) -> Vec<Vec<u8>> {
        self.pending
            .keys()
            .filter(|key| key.starts_with(key_prefix))
            .cloned()
            .collect()
    }

    /// Commits the pending block and returns its root hash.
    pub fn commit(&mut self) -> Hash {
        self.committed.push(self.pending.clone());
        let root = root_of_state(&self.pending);
        trace!(height = self.current_height(), root = ?root, "committed block");
        root
    }

    /// Returns the height of the latest committed block, 0 before genesis.
    pub fn current_height(&self) -> RawHeight {
        self.committed.len() as RawHeight
    }

    pub fn root_hash(&self, height: StoreHeight) -> Option<Hash> {
        self.get_state(height).map(root_of_state)
    }

    /// Proves the presence or absence of `key` in the committed block at `height`.
    pub fn get_proof(&self, height: StoreHeight, key: &[u8]) -> Option<MerkleProof> {
        if height == StoreHeight::Pending {
            return None;
        }

        let state = self.get_state(height)?;
        let leaves: Vec<(Vec<u8>, Vec<u8>)> =
            state.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

        trace!(key = %String::from_utf8_lossy(key), %height, "get proof");

        match leaves.binary_search_by(|(k, _)| k.as_slice().cmp(key)) {
            Ok(index) => prove_leaf(&leaves, index).map(MerkleProof::Exist),
            Err(index) => Some(MerkleProof::NonExist(NonExistenceProof {
                left: index.checked_sub(1).and_then(|i| prove_leaf(&leaves, i)),
                right: prove_leaf(&leaves, index),
                leaf_count: leaves.len() as u64,
            })),
        }
    }
}

fn root_of_state(state: &State) -> Hash {
    let leaves: Vec<(Vec<u8>, Vec<u8>)> =
        state.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    root_of(&leaves)
}
