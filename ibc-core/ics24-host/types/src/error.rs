//! Foundational error types raised by hosts and identifier parsing.

use displaydoc::Display;
use ibc_handshake_primitives::prelude::*;
use ibc_handshake_primitives::DecodingError;

/// Errors that originate from host implementations.
#[derive(Debug, Display)]
pub enum HostError {
    /// invalid data: `{description}`
    InvalidData { description: String },
    /// missing data: `{description}`
    MissingData { description: String },
    /// failed to store data: `{description}`
    FailedToStoreData { description: String },
    /// failed to retrieve data from store: `{description}`
    FailedToRetrieveFromStore { description: String },
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// other error: `{description}`
    Other { description: String },
}

impl HostError {
    pub fn missing_data<T: ToString>(description: T) -> Self {
        Self::MissingData {
            description: description.to_string(),
        }
    }

    pub fn failed_to_store<T: ToString>(description: T) -> Self {
        Self::FailedToStoreData {
            description: description.to_string(),
        }
    }

    pub fn failed_to_retrieve<T: ToString>(description: T) -> Self {
        Self::FailedToRetrieveFromStore {
            description: description.to_string(),
        }
    }
}

impl From<DecodingError> for HostError {
    fn from(e: DecodingError) -> Self {
        Self::Decoding(e)
    }
}

/// Errors that arise when parsing identifiers.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Display, PartialEq, Eq)]
pub enum IdentifierError {
    /// identifier `{id}` has invalid length; must be between [`{min}`,`{max}`]
    InvalidLength { id: String, min: u64, max: u64 },
    /// identifier `{id}` can only contain alphanumeric characters or `.`, `_`, `+`, `-`, `#`, `[`, `]`, `<`, `>`
    InvalidCharacter { id: String },
    /// failed to parse `{value}`: `{description}`
    FailedToParse { value: String, description: String },
}

#[cfg(feature = "std")]
impl std::error::Error for IdentifierError {}

#[cfg(feature = "std")]
impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
