//! Foundational error types that are applicable across the workspace.

use displaydoc::Display;

use crate::prelude::*;

/// Causes of decoding failures
#[derive(Debug, Display)]
pub enum DecodingError {
    /// invalid identifier error: `{0}`
    InvalidIdentifier(String),
    /// invalid field: `{0}`
    InvalidField(String),
    /// missing field: `{0}`
    MissingField(String),
    /// mismatched type URLs: expected `{expected}`, actual `{actual}`
    MismatchedTypeUrls { expected: String, actual: String },
    /// failed to decode borsh value: `{description}`
    FailedToDecode { description: String },
}

#[cfg(feature = "std")]
impl std::error::Error for DecodingError {}
