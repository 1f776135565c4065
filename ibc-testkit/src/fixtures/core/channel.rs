//! Builders of channel records and datagrams for a channel `chanA` on port
//! `transfer` of chain A, paired with `chanB` on port `transfer` of chain B,
//! over the connections of [`super::connection`].

use core::str::FromStr;

use ibc_handshake_core::channel::types::channel::{ChannelEnd, Counterparty, Order, State};
use ibc_handshake_core::channel::types::msgs::{
    MsgChannelCloseConfirm, MsgChannelCloseInit, MsgChannelOpenAck, MsgChannelOpenConfirm,
    MsgChannelOpenInit, MsgChannelOpenTimeout, MsgChannelOpenTry,
};
use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_core::host::types::identifiers::{ChannelId, PortId};

use super::connection::{conn_id_on_a, conn_id_on_b, timeout_at, DEFAULT_TIMEOUT_HEIGHT};

pub fn port_id() -> PortId {
    PortId::transfer()
}

pub fn chan_id_on_a() -> ChannelId {
    ChannelId::from_str("chanA").expect("Never fails")
}

pub fn chan_id_on_b() -> ChannelId {
    ChannelId::from_str("chanB").expect("Never fails")
}

/// Returns chain A's channel end in the given state.
pub fn dummy_chan_end_on_a(
    state: State,
    ordering: Order,
    next_timeout_height: TimeoutHeight,
) -> ChannelEnd {
    ChannelEnd::new(
        state,
        ordering,
        Counterparty::new(port_id(), chan_id_on_b()),
        conn_id_on_a(),
        next_timeout_height,
    )
}

/// Returns chain B's channel end in the given state.
pub fn dummy_chan_end_on_b(
    state: State,
    ordering: Order,
    next_timeout_height: TimeoutHeight,
) -> ChannelEnd {
    ChannelEnd::new(
        state,
        ordering,
        Counterparty::new(port_id(), chan_id_on_a()),
        conn_id_on_b(),
        next_timeout_height,
    )
}

/// Returns a `MsgChannelOpenInit` for `chanA` over `connA`.
pub fn dummy_msg_chan_open_init(ordering: Order) -> MsgChannelOpenInit {
    MsgChannelOpenInit {
        port_id_on_a: port_id(),
        chan_id_on_a: chan_id_on_a(),
        connection_id_on_a: conn_id_on_a(),
        port_id_on_b: port_id(),
        chan_id_on_b: chan_id_on_b(),
        ordering,
        next_timeout_height: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

/// Returns a `MsgChannelOpenTry` for `chanB` over `connB`, proving `chanA`.
pub fn dummy_msg_chan_open_try(
    ordering: Order,
    proof_chan_end_on_a: CommitmentProofBytes,
    proof_height_on_a: Height,
) -> MsgChannelOpenTry {
    MsgChannelOpenTry {
        port_id_on_b: port_id(),
        chan_id_on_b: chan_id_on_b(),
        connection_id_on_b: conn_id_on_b(),
        port_id_on_a: port_id(),
        chan_id_on_a: chan_id_on_a(),
        ordering,
        proof_chan_end_on_a,
        proof_height_on_a,
        timeout_height_on_a: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
        next_timeout_height: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

/// Returns a `MsgChannelOpenAck` for `chanA`, proving `chanB`.
pub fn dummy_msg_chan_open_ack(
    proof_chan_end_on_b: CommitmentProofBytes,
    proof_height_on_b: Height,
) -> MsgChannelOpenAck {
    MsgChannelOpenAck {
        port_id_on_a: port_id(),
        chan_id_on_a: chan_id_on_a(),
        proof_chan_end_on_b,
        proof_height_on_b,
        timeout_height_on_b: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
        next_timeout_height: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

/// Returns a `MsgChannelOpenConfirm` for `chanB`, proving `chanA`.
pub fn dummy_msg_chan_open_confirm(
    proof_chan_end_on_a: CommitmentProofBytes,
    proof_height_on_a: Height,
) -> MsgChannelOpenConfirm {
    MsgChannelOpenConfirm {
        port_id_on_b: port_id(),
        chan_id_on_b: chan_id_on_b(),
        proof_chan_end_on_a,
        proof_height_on_a,
        timeout_height_on_a: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

pub fn dummy_msg_chan_open_timeout(
    proof_unreceived_on_b: CommitmentProofBytes,
    proof_height_on_b: Height,
) -> MsgChannelOpenTimeout {
    MsgChannelOpenTimeout {
        port_id_on_a: port_id(),
        chan_id_on_a: chan_id_on_a(),
        proof_unreceived_on_b,
        proof_height_on_b,
    }
}

pub fn dummy_msg_chan_close_init() -> MsgChannelCloseInit {
    MsgChannelCloseInit {
        port_id_on_a: port_id(),
        chan_id_on_a: chan_id_on_a(),
    }
}

pub fn dummy_msg_chan_close_confirm(
    proof_chan_end_on_a: CommitmentProofBytes,
    proof_height_on_a: Height,
) -> MsgChannelCloseConfirm {
    MsgChannelCloseConfirm {
        port_id_on_b: port_id(),
        chan_id_on_b: chan_id_on_b(),
        proof_chan_end_on_a,
        proof_height_on_a,
    }
}
