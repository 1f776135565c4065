use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_primitives::prelude::*;

use crate::error::IdentifierError;

/// A channel sequence number. Send and receive counters start at 1 once the
/// channel opens and never decrease.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct Sequence(u64);

impl core::str::FromStr for Sequence {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.parse::<u64>().map_err(|e| {
            IdentifierError::FailedToParse {
                value: s.to_string(),
                description: e.to_string(),
            }
        })?))
    }
}

impl Sequence {
    /// The value every counter takes when its channel first opens.
    pub const fn first() -> Self {
        Sequence(1)
    }

    /// Gives the sequence number.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the sequence number is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Increments the sequence number by one, or returns `None` on overflow.
    pub fn checked_increment(&self) -> Option<Sequence> {
        self.0.checked_add(1).map(Sequence)
    }
}

impl From<u64> for Sequence {
    fn from(seq: u64) -> Self {
        Sequence(seq)
    }
}

impl From<Sequence> for u64 {
    fn from(s: Sequence) -> u64 {
        s.0
    }
}

impl core::fmt::Display for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.0)
    }
}
