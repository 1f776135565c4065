//! Defines the type-tagged envelope used to carry client states,
//! consensus states and headers through the client-agnostic handlers.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::prelude::*;
use crate::DecodingError;

/// A type-tagged opaque payload. `type_url` names the concrete type that
/// `value` decodes into.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct Any {
    pub type_url: String,
    pub value: Vec<u8>,
}

impl Any {
    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }

    /// Returns an error unless the envelope is tagged with `expected`.
    pub fn verify_type_url(&self, expected: &str) -> Result<(), DecodingError> {
        if self.type_url != expected {
            return Err(DecodingError::MismatchedTypeUrls {
                expected: expected.to_string(),
                actual: self.type_url.clone(),
            });
        }
        Ok(())
    }
}
