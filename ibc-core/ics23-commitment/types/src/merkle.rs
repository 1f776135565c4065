//! Merkle key paths

use ibc_handshake_primitives::prelude::*;

/// The full key of a committed value: the prefix segments of the committing
/// chain followed by the store path of the value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerklePath {
    pub key_path: Vec<String>,
}

impl MerklePath {
    /// The flat store key, with segments joined by `/`.
    pub fn to_key(&self) -> Vec<u8> {
        self.key_path.join("/").into_bytes()
    }
}
