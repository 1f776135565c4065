//! Membership and non-membership proofs over the sorted-leaf Merkle tree of
//! a [`MerkleStore`](super::MerkleStore).
//!
//! Leaves are ordered by key. A leaf hashes as
//! `H(0x00 || len(key) || key || H(value))`, an inner node as
//! `H(0x01 || left || right)`, and a node without a sibling is promoted to
//! the next level unchanged. The root commits to the leaf count:
//! `H(0x02 || count || tree)`, or `H(0x02 || 0)` for the empty tree.

use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_core::primitives::prelude::*;
use sha2::{Digest, Sha256};

pub type Hash = [u8; 32];

const LEAF_TAG: u8 = 0x00;
const INNER_TAG: u8 = 0x01;
const ROOT_TAG: u8 = 0x02;

pub(crate) fn hash_leaf(key: &[u8], value: &[u8]) -> Hash {
    let mut sha = Sha256::new();
    sha.update([LEAF_TAG]);
    sha.update((key.len() as u64).to_be_bytes());
    sha.update(key);
    sha.update(Sha256::digest(value));
    sha.finalize().into()
}

pub(crate) fn hash_inner(left: &Hash, right: &Hash) -> Hash {
    let mut sha = Sha256::new();
    sha.update([INNER_TAG]);
    sha.update(left);
    sha.update(right);
    sha.finalize().into()
}

pub(crate) fn hash_root(leaf_count: u64, tree: Option<&Hash>) -> Hash {
    let mut sha = Sha256::new();
    sha.update([ROOT_TAG]);
    sha.update(leaf_count.to_be_bytes());
    if let Some(tree) = tree {
        sha.update(tree);
    }
    sha.finalize().into()
}

/// Proof that `key` is committed with `value`, as the leaf at `leaf_index`
/// of a tree holding `leaf_count` leaves.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ExistenceProof {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
    pub leaf_index: u64,
    pub leaf_count: u64,
    /// Sibling hashes from the leaf level upwards, skipping promoted levels.
    pub siblings: Vec<Hash>,
}

impl ExistenceProof {
    /// Recomputes the root this proof commits to, or `None` if the proof is
    /// inconsistent with its own leaf position.
    pub fn compute_root(&self) -> Option<Hash> {
        if self.leaf_index >= self.leaf_count {
            return None;
        }

        let mut node = hash_leaf(&self.key, &self.value);
        let mut index = self.leaf_index;
        let mut width = self.leaf_count;
        let mut siblings = self.siblings.iter();

        while width > 1 {
            let promoted = index % 2 == 0 && index + 1 == width;

            if !promoted {
                let sibling = siblings.next()?;
                node = if index % 2 == 0 {
                    hash_inner(&node, sibling)
                } else {
                    hash_inner(sibling, &node)
                };
            }

            index /= 2;
            width = width / 2 + width % 2;
        }

        if siblings.next().is_some() {
            return None;
        }

        Some(hash_root(self.leaf_count, Some(&node)))
    }

    pub fn verify(&self, root: &[u8]) -> bool {
        self.compute_root()
            .is_some_and(|computed| computed.as_slice() == root)
    }
}

/// Proof that nothing is committed under a key, given by the existence of
/// its would-be neighbours in key order.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct NonExistenceProof {
    pub left: Option<ExistenceProof>,
    pub right: Option<ExistenceProof>,
    pub leaf_count: u64,
}

impl NonExistenceProof {
    pub fn verify(&self, root: &[u8], key: &[u8]) -> bool {
        let left_ok = match &self.left {
            Some(left) => {
                left.leaf_count == self.leaf_count
                    && left.key.as_slice() < key
                    && left.verify(root)
            }
            None => true,
        };

        let right_ok = match &self.right {
            Some(right) => {
                right.leaf_count == self.leaf_count
                    && key < right.key.as_slice()
                    && right.verify(root)
            }
            None => true,
        };

        let adjacent = match (&self.left, &self.right) {
            (Some(left), Some(right)) => {
                left.leaf_index.checked_add(1) == Some(right.leaf_index)
            }
            (Some(left), None) => left.leaf_index.checked_add(1) == Some(self.leaf_count),
            (None, Some(right)) => right.leaf_index == 0,
            (None, None) => {
                self.leaf_count == 0 && hash_root(0, None).as_slice() == root
            }
        };

        left_ok && right_ok && adjacent
    }
}

/// The proof format of the in-memory store, carried as borsh-encoded
/// commitment proof bytes.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum MerkleProof {
    Exist(ExistenceProof),
    NonExist(NonExistenceProof),
}

/// Builds the existence proof of the leaf at `index` among `leaves`, which
/// must be sorted by key.
pub(crate) fn prove_leaf(leaves: &[(Vec<u8>, Vec<u8>)], index: usize) -> Option<ExistenceProof> {
    let (key, value) = leaves.get(index)?;

    let mut level: Vec<Hash> = leaves.iter().map(|(k, v)| hash_leaf(k, v)).collect();
    let mut position = index;
    let mut siblings = Vec::new();

    while level.len() > 1 {
        let sibling = if position % 2 == 0 {
            level.get(position + 1)
        } else {
            level.get(position - 1)
        };

        if let Some(sibling) = sibling {
            siblings.push(*sibling);
        }

        level = next_level(&level);
        position /= 2;
    }

    Some(ExistenceProof {
        key: key.clone(),
        value: value.clone(),
        leaf_index: index as u64,
        leaf_count: leaves.len() as u64,
        siblings,
    })
}

/// Computes the root of `leaves`, which must be sorted by key.
pub(crate) fn root_of(leaves: &[(Vec<u8>, Vec<u8>)]) -> Hash {
    let mut level: Vec<Hash> = leaves.iter().map(|(k, v)| hash_leaf(k, v)).collect();

    while level.len() > 1 {
        level = next_level(&level);
    }

    hash_root(leaves.len() as u64, level.first())
}

fn next_level(level: &[Hash]) -> Vec<Hash> {
    level
        .chunks(2)
        .filter_map(|pair| match pair {
            [left, right] => Some(hash_inner(left, right)),
            [single] => Some(*single),
            _ => None,
        })
        .collect()
}
