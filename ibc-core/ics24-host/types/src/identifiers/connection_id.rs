use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use derive_more::Into;
use ibc_handshake_primitives::prelude::*;

use crate::error::IdentifierError;
use crate::validate::validate_connection_identifier;

/// Identifier of a connection end, chosen by the caller of `OpenInit` or
/// `OpenTry` and unique on the local chain only.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into, BorshSerialize, BorshDeserialize,
)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: &str) -> Result<Self, IdentifierError> {
        Self::from_str(id)
    }

    /// Get this identifier as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get this identifier as a borrowed byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// This implementation provides a `to_string` method.
impl Display for ConnectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConnectionId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_connection_identifier(s).map(|_| Self(s.to_string()))
    }
}

/// Equality check against string literal (satisfies &ConnectionId == &str).
impl PartialEq<str> for ConnectionId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}
