use borsh::{BorshDeserialize, BorshSerialize};

use crate::prelude::*;
use crate::DecodingError;

/// Canonical byte encoding of committed values.
///
/// Every record a chain commits to its store, and every value a counterparty
/// proof is checked against, goes through this encoding so that both sides
/// derive identical bytes from identical records.
pub trait Codec: BorshSerialize + BorshDeserialize + Sized {
    fn encode_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing into a `Vec` never fails.
        let _ = BorshSerialize::serialize(self, &mut buf);
        buf
    }

    fn decode_vec(bytes: &[u8]) -> Result<Self, DecodingError> {
        borsh::from_slice(bytes).map_err(|e| DecodingError::FailedToDecode {
            description: e.to_string(),
        })
    }
}

impl<T> Codec for T where T: BorshSerialize + BorshDeserialize {}
