//! Builders of connection records and datagrams between a chain A,
//! tracking B with `clientAtoB` and holding `connA`, and a chain B,
//! tracking A with `clientBtoA` and holding `connB`. Both chains commit
//! under `ibc/v1`.

use core::str::FromStr;

use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::commitment_types::commitment::{CommitmentPrefix, CommitmentProofBytes};
use ibc_handshake_core::connection::types::msgs::{
    MsgConnectionCloseConfirm, MsgConnectionCloseInit, MsgConnectionOpenAck,
    MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTimeout,
    MsgConnectionOpenTry,
};
use ibc_handshake_core::connection::types::{ConnectionEnd, Counterparty, State};
use ibc_handshake_core::host::types::identifiers::{ClientId, ConnectionId};
use ibc_handshake_core::primitives::prelude::*;

pub const DEFAULT_TIMEOUT_HEIGHT: u64 = 100;

pub fn client_id_on_a() -> ClientId {
    ClientId::from_str("clientAtoB").expect("Never fails")
}

pub fn client_id_on_b() -> ClientId {
    ClientId::from_str("clientBtoA").expect("Never fails")
}

pub fn conn_id_on_a() -> ConnectionId {
    ConnectionId::from_str("connA").expect("Never fails")
}

pub fn conn_id_on_b() -> ConnectionId {
    ConnectionId::from_str("connB").expect("Never fails")
}

pub fn dummy_prefix() -> CommitmentPrefix {
    CommitmentPrefix::from_store("ibc", 1).expect("Never fails")
}

/// Returns `At(height)` on revision 0.
pub fn timeout_at(height: u64) -> TimeoutHeight {
    TimeoutHeight::At(Height::new(0, height).expect("Never fails"))
}

/// Returns the counterparty of chain A's connection: `connB` on chain B.
pub fn dummy_counterparty_of_a() -> Counterparty {
    Counterparty::new(client_id_on_b(), conn_id_on_b(), dummy_prefix())
}

/// Returns the counterparty of chain B's connection: `connA` on chain A.
pub fn dummy_counterparty_of_b() -> Counterparty {
    Counterparty::new(client_id_on_a(), conn_id_on_a(), dummy_prefix())
}

/// Returns chain A's connection end in the given state.
pub fn dummy_conn_end_on_a(state: State, next_timeout_height: TimeoutHeight) -> ConnectionEnd {
    ConnectionEnd::new(
        state,
        client_id_on_a(),
        dummy_counterparty_of_a(),
        next_timeout_height,
    )
}

/// Returns chain B's connection end in the given state.
pub fn dummy_conn_end_on_b(state: State, next_timeout_height: TimeoutHeight) -> ConnectionEnd {
    ConnectionEnd::new(
        state,
        client_id_on_b(),
        dummy_counterparty_of_b(),
        next_timeout_height,
    )
}

/// Returns a `MsgConnectionOpenInit` for `connA` with a timeout of 100.
pub fn dummy_msg_conn_open_init() -> MsgConnectionOpenInit {
    MsgConnectionOpenInit {
        conn_id_on_a: conn_id_on_a(),
        client_id_on_a: client_id_on_a(),
        counterparty: dummy_counterparty_of_a(),
        next_timeout_height: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

/// Returns a `MsgConnectionOpenTry` for `connB`, proving `connA` with `proof`.
pub fn dummy_msg_conn_open_try(
    proof_conn_end_on_a: CommitmentProofBytes,
    proof_height_on_a: Height,
) -> MsgConnectionOpenTry {
    MsgConnectionOpenTry {
        conn_id_on_b: conn_id_on_b(),
        client_id_on_b: client_id_on_b(),
        counterparty: dummy_counterparty_of_b(),
        proof_conn_end_on_a,
        proof_height_on_a,
        timeout_height_on_a: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
        next_timeout_height: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

/// Returns a `MsgConnectionOpenAck` for `connA`, proving `connB` with `proof`.
pub fn dummy_msg_conn_open_ack(
    proof_conn_end_on_b: CommitmentProofBytes,
    proof_height_on_b: Height,
) -> MsgConnectionOpenAck {
    MsgConnectionOpenAck {
        conn_id_on_a: conn_id_on_a(),
        proof_conn_end_on_b,
        proof_height_on_b,
        timeout_height_on_b: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
        next_timeout_height: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

/// Returns a `MsgConnectionOpenConfirm` for `connB`, proving `connA` with `proof`.
pub fn dummy_msg_conn_open_confirm(
    proof_conn_end_on_a: CommitmentProofBytes,
    proof_height_on_a: Height,
) -> MsgConnectionOpenConfirm {
    MsgConnectionOpenConfirm {
        conn_id_on_b: conn_id_on_b(),
        proof_conn_end_on_a,
        proof_height_on_a,
        timeout_height_on_a: timeout_at(DEFAULT_TIMEOUT_HEIGHT),
    }
}

pub fn dummy_msg_conn_open_timeout(
    proof_unreceived_on_b: CommitmentProofBytes,
    proof_height_on_b: Height,
) -> MsgConnectionOpenTimeout {
    MsgConnectionOpenTimeout {
        conn_id_on_a: conn_id_on_a(),
        proof_unreceived_on_b,
        proof_height_on_b,
    }
}

pub fn dummy_msg_conn_close_init() -> MsgConnectionCloseInit {
    MsgConnectionCloseInit {
        conn_id_on_a: conn_id_on_a(),
    }
}

pub fn dummy_msg_conn_close_confirm(
    proof_conn_end_on_a: CommitmentProofBytes,
    proof_height_on_a: Height,
) -> MsgConnectionCloseConfirm {
    MsgConnectionCloseConfirm {
        conn_id_on_b: conn_id_on_b(),
        proof_conn_end_on_a,
        proof_height_on_a,
    }
}

/// Returns proof bytes that decode to nothing a client accepts.
pub fn dummy_proof() -> CommitmentProofBytes {
    CommitmentProofBytes::try_from(vec![0xff; 8]).expect("Never fails")
}
