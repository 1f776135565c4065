use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use derive_more::Into;
use ibc_handshake_primitives::prelude::*;

use crate::error::IdentifierError;
use crate::validate::validate_client_identifier;

/// Identifier of a light client hosted on the local chain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into, BorshSerialize, BorshDeserialize,
)]
pub struct ClientId(String);

impl ClientId {
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

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_client_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Equality check against string literal (satisfies &ClientId == &str).
impl PartialEq<str> for ClientId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}
