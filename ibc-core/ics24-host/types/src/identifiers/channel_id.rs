use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use derive_more::Into;
use ibc_handshake_primitives::prelude::*;

use crate::error::IdentifierError;
use crate::validate::validate_channel_identifier;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into, BorshSerialize, BorshDeserialize,
)]
pub struct ChannelId(String);

impl ChannelId {
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

impl Display for ChannelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_channel_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Equality check against string literal (satisfies &ChannelId == &str).
impl PartialEq<str> for ChannelId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}
