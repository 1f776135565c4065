use core::fmt::{Display, Error as FmtError, Formatter};

use borsh::{BorshDeserialize, BorshSerialize};
use ibc_handshake_client_types::TimeoutHeight;
use ibc_handshake_commitment_types::commitment::CommitmentPrefix;
use ibc_handshake_host_types::identifiers::{ClientId, ConnectionId};
use ibc_handshake_primitives::prelude::*;
use ibc_handshake_primitives::utils::PrettySlice;

use crate::error::ConnectionError;

/// A connection end together with the local identifier it is stored under.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifiedConnectionEnd {
    pub connection_id: ConnectionId,
    pub connection_end: ConnectionEnd,
}

impl IdentifiedConnectionEnd {
    pub fn new(connection_id: ConnectionId, connection_end: ConnectionEnd) -> Self {
        IdentifiedConnectionEnd {
            connection_id,
            connection_end,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn end(&self) -> &ConnectionEnd {
        &self.connection_end
    }
}

/// The local record of a connection, committed under `connections/{id}`.
///
/// It names the counterparty only by identifiers and prefix; everything the
/// local chain knows about the counterparty's state was established by
/// verifying proofs against the local light client `client_id`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ConnectionEnd {
    state: State,
    client_id: ClientId,
    counterparty: Counterparty,
    next_timeout_height: TimeoutHeight,
}

impl ConnectionEnd {
    pub fn new(
        state: State,
        client_id: ClientId,
        counterparty: Counterparty,
        next_timeout_height: TimeoutHeight,
    ) -> Self {
        Self {
            state,
            client_id,
            counterparty,
            next_timeout_height,
        }
    }

    /// Getter for the state of this connection end.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Setter for the `state` field.
    pub fn set_state(&mut self, new_state: State) {
        self.state = new_state;
    }

    /// Setter for the `next_timeout_height` field.
    pub fn set_next_timeout_height(&mut self, next_timeout_height: TimeoutHeight) {
        self.next_timeout_height = next_timeout_height;
    }

    /// Helper function to compare the counterparty of this end with another counterparty.
    pub fn counterparty_matches(&self, other: &Counterparty) -> bool {
        self.counterparty.eq(other)
    }

    /// Helper function to compare the client id of this end with another client identifier.
    pub fn client_id_matches(&self, other: &ClientId) -> bool {
        self.client_id.eq(other)
    }

    /// Returns `true` iff the connection is open, i.e. available for channels.
    pub fn is_open(&self) -> bool {
        self.state == State::Open
    }

    /// Checks that the state of this end is `expected`.
    pub fn verify_state_matches(
        &self,
        connection_id: &ConnectionId,
        expected: &State,
    ) -> Result<(), ConnectionError> {
        self.verify_state_in(connection_id, core::slice::from_ref(expected))
    }

    /// Checks that the state of this end is one of `expected`.
    pub fn verify_state_in(
        &self,
        connection_id: &ConnectionId,
        expected: &[State],
    ) -> Result<(), ConnectionError> {
        if !expected.contains(&self.state) {
            return Err(ConnectionError::InvalidState {
                connection_id: connection_id.clone(),
                expected: PrettySlice(expected).to_string(),
                actual: self.state,
            });
        }
        Ok(())
    }

    /// Getter for the client id on the local party of this connection end.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for the counterparty.
    pub fn counterparty(&self) -> &Counterparty {
        &self.counterparty
    }

    /// Getter for the height past which the pending handshake step is abandoned.
    pub fn next_timeout_height(&self) -> &TimeoutHeight {
        &self.next_timeout_height
    }
}

/// The counterparty side of a connection: the identifier of the connection
/// on the counterparty chain, the client the counterparty uses to track this
/// chain, and the prefix under which the counterparty commits its state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Counterparty {
    pub client_id: ClientId,
    pub connection_id: ConnectionId,
    pub prefix: CommitmentPrefix,
}

impl Counterparty {
    pub fn new(client_id: ClientId, connection_id: ConnectionId, prefix: CommitmentPrefix) -> Self {
        Self {
            client_id,
            connection_id,
            prefix,
        }
    }

    /// Getter for the client id.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for connection id.
    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    /// Getter for the commitment prefix.
    pub fn prefix(&self) -> &CommitmentPrefix {
        &self.prefix
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
    /// Yields the State as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Init => "INIT",
            Self::TryOpen => "TRYOPEN",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns whether or not this connection state is `Open`.
    pub fn is_open(self) -> bool {
        self == State::Open
    }

    /// Returns `true` if the handshake may move from `self` to `next`.
    ///
    /// The initiator moves `Uninitialized -> Init -> Open`, the responder
    /// `Uninitialized -> TryOpen -> Open`. Any state other than
    /// `Uninitialized` may be closed, and only `Init` leaves `Closed`.
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

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}
