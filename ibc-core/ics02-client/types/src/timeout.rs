use core::fmt::{Display, Error as FmtError, Formatter};

use borsh::{BorshDeserialize, BorshSerialize};

use crate::Height;

/// The height of the local chain after which a pending handshake step is
/// abandoned.
///
/// A handshake step carrying `At(h)` is accepted only while the host height
/// is at most `h`. `Never` places no bound on the step.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, BorshSerialize, BorshDeserialize,
)]
pub enum TimeoutHeight {
    #[default]
    Never,
    At(Height),
}

impl TimeoutHeight {
    pub fn no_timeout() -> Self {
        Self::Never
    }

    /// Check if a height is *strictly past* the timeout height, and thus is
    /// deemed expired.
    pub fn has_expired(&self, height: Height) -> bool {
        match self {
            Self::At(timeout_height) => height > *timeout_height,
            // When there's no timeout, heights are never expired
            Self::Never => false,
        }
    }

    pub fn height(&self) -> Option<Height> {
        match self {
            Self::At(height) => Some(*height),
            Self::Never => None,
        }
    }
}

impl From<Height> for TimeoutHeight {
    fn from(height: Height) -> Self {
        Self::At(height)
    }
}

impl Display for TimeoutHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            TimeoutHeight::At(timeout_height) => write!(f, "{timeout_height}"),
            TimeoutHeight::Never => write!(f, "no timeout"),
        }
    }
}
