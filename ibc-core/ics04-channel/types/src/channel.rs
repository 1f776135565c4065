use core::fmt::{Display, Error as FmtError, Formatter};

use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_client_types::TimeoutHeight;
use ibc_handshake_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_handshake_primitives::prelude::*;
use ibc_handshake_primitives::utils::PrettySlice;

use crate::error::ChannelError;

/// A channel end together with the port and channel it is stored under.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifiedChannelEnd {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub channel_end: ChannelEnd,
}

impl IdentifiedChannelEnd {
    pub fn new(port_id: PortId, channel_id: ChannelId, channel_end: ChannelEnd) -> Self {
        IdentifiedChannelEnd {
            port_id,
            channel_id,
            channel_end,
        }
    }
}

/// One end of a channel, committed under `channelEnds/ports/{port}/channels/{channel}`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChannelEnd {
    pub state: State,
    pub ordering: Order,
    pub remote: Counterparty,
    pub connection_id: ConnectionId,
    pub next_timeout_height: TimeoutHeight,
}

impl ChannelEnd {
    pub fn new(
        state: State,
        ordering: Order,
        remote: Counterparty,
        connection_id: ConnectionId,
        next_timeout_height: TimeoutHeight,
    ) -> Self {
        Self {
            state,
            ordering,
            remote,
            connection_id,
            next_timeout_height,
        }
    }

    /// Updates the ChannelEnd to assume a new State 's'.
    pub fn set_state(&mut self, s: State) {
        self.state = s;
    }

    pub fn set_next_timeout_height(&mut self, next_timeout_height: TimeoutHeight) {
        self.next_timeout_height = next_timeout_height;
    }

    /// Returns the state of this [`ChannelEnd`].
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn ordering(&self) -> &Order {
        &self.ordering
    }

    pub fn counterparty(&self) -> &Counterparty {
        &self.remote
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn next_timeout_height(&self) -> &TimeoutHeight {
        &self.next_timeout_height
    }

    /// Helper function to compare the state of this end with another state.
    pub fn state_matches(&self, other: &State) -> bool {
        self.state.eq(other)
    }

    /// Returns `true` iff the channel is open, i.e. its sequence counters are in use.
    pub fn is_open(&self) -> bool {
        self.state_matches(&State::Open)
    }

    /// Checks that the state of this end is `expected`.
    pub fn verify_state_matches(&self, expected: &State) -> Result<(), ChannelError> {
        self.verify_state_in(core::slice::from_ref(expected))
    }

    /// Checks that the state of this end is one of `expected`.
    pub fn verify_state_in(&self, expected: &[State]) -> Result<(), ChannelError> {
        if !expected.contains(&self.state) {
            return Err(ChannelError::InvalidState {
                expected: PrettySlice(expected).to_string(),
                actual: self.state,
            });
        }
        Ok(())
    }

    /// Checks that the channel is not closed.
    pub fn verify_not_closed(&self) -> Result<(), ChannelError> {
        self.verify_state_in(&[State::Init, State::TryOpen, State::Open])
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Counterparty {
    pub port_id: PortId,
    pub channel_id: ChannelId,
}

impl Counterparty {
    pub fn new(port_id: PortId, channel_id: ChannelId) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }

    pub fn port_id(&self) -> &PortId {
        &self.port_id
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }
}

impl Display for Counterparty {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}/{}", self.port_id, self.channel_id)
    }
}

/// How a future packet layer consumes the receive sequence of a channel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize,
)]
#[borsh(use_discriminant = true)]
pub enum Order {
    /// Data may be received in any order; the receive sequence is a high-water mark.
    #[default]
    Unordered = 1,
    /// Data must be received in exactly the order it was sent.
    Ordered = 2,
}

impl Order {
    /// Yields the Order as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unordered => "ORDER_UNORDERED",
            Self::Ordered => "ORDER_ORDERED",
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, BorshSerialize, BorshDeserialize,
)]
#[borsh(use_discriminant = true)]
pub enum State {
    Uninitialized = 0,
    Init = 1,
    TryOpen = 2,
    Open = 3,
    Closed = 4,
}

impl State {
    /// Yields the state as a string
    pub fn as_string(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Init => "INIT",
            Self::TryOpen => "TRYOPEN",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns whether or not this channel state is `Open`.
    pub fn is_open(self) -> bool {
        self == State::Open
    }

    /// Returns `true` if the handshake may move from `self` to `next`.
    ///
    /// Only `Init` leaves `Closed`.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::Init | Self::TryOpen)
                | (Self::Closed, Self::Init)
                | (Self::Init | Self::TryOpen, Self::Open)
                | (Self::Init | Self::TryOpen | Self::Open, Self::Closed)
        )
    }
}

/// Provides a `to_string` method.
impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_string())
    }
}
