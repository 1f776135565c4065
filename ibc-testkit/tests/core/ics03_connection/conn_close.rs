use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::connection::types::msgs::ConnectionMsg;
use ibc_handshake_core::connection::types::State;
use ibc_handshake_core::connection::ConnectionHandshake;
use ibc_handshake_core::entrypoint::validate;
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::IbcEvent;
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::path::ConnectionPath;
use ibc_handshake_testkit::fixtures::core::connection::{
    client_id_on_b, conn_id_on_a, conn_id_on_b, dummy_conn_end_on_a, dummy_conn_end_on_b,
    dummy_msg_conn_close_confirm, dummy_msg_conn_close_init, timeout_at,
};
use ibc_handshake_testkit::fixtures::Expect;
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

use crate::core::{chain_tracking, commit_and_prove};

#[rstest]
#[test_log::test]
#[case::init(State::Init, timeout_at(50))]
#[case::try_open(State::TryOpen, timeout_at(50))]
#[case::open(State::Open, TimeoutHeight::Never)]
fn conn_close_init_closes_live_connection(
    #[case] state: State,
    #[case] timeout: TimeoutHeight,
) {
    let mut ctx =
        MockContext::default().with_connection(conn_id_on_a(), dummy_conn_end_on_a(state, timeout));

    let conn_end = ctx
        .conn_close_init(dummy_msg_conn_close_init())
        .expect("live connection closes");

    assert_eq!(conn_end.state(), &State::Closed);
    assert_eq!(conn_end.next_timeout_height(), &TimeoutHeight::Never);
    assert!(matches!(
        ctx.get_events()[1],
        IbcEvent::CloseInitConnection(_)
    ));
    assert!(!ctx
        .is_connection_available(&conn_id_on_a())
        .expect("no store failure"));
}

#[test_log::test]
fn conn_close_init_on_closed_connection_fails() {
    let ctx = MockContext::default().with_connection(
        conn_id_on_a(),
        dummy_conn_end_on_a(State::Closed, TimeoutHeight::Never),
    );

    let res = validate(
        &ctx,
        MsgEnvelope::Connection(ConnectionMsg::CloseInit(dummy_msg_conn_close_init())),
    );

    assert!(
        Expect::Failure(Some(ErrorKind::InvalidState)).matches(&res),
        "{res:?}"
    );
}

#[test_log::test]
fn conn_close_init_on_unknown_connection_fails() {
    let mut ctx = MockContext::default();

    let res = ctx.conn_close_init(dummy_msg_conn_close_init());

    assert!(
        Expect::Failure(Some(ErrorKind::NotFound)).matches(&res),
        "{res:?}"
    );
}

/// Chain B holding `connB` in `state_on_b`, tracking chain A after A
/// committed `connA` in `state_on_a`, and a close confirmation proving it.
fn close_confirm_on_b(state_on_a: State, state_on_b: State) -> Result<State, ErrorKind> {
    let ctx_a = MockContext::default().with_connection(
        conn_id_on_a(),
        dummy_conn_end_on_a(state_on_a, TimeoutHeight::Never),
    );
    let (ctx_a, proof, proof_height) = commit_and_prove(ctx_a, ConnectionPath::new(&conn_id_on_a()));

    let mut ctx_b = chain_tracking(
        "mockB",
        Height::new(0, 10).expect("Never fails"),
        &client_id_on_b(),
        &ctx_a,
        proof_height,
    )
    .with_connection(
        conn_id_on_b(),
        dummy_conn_end_on_b(state_on_b, TimeoutHeight::Never),
    );

    ctx_b
        .conn_close_confirm(dummy_msg_conn_close_confirm(proof, proof_height))
        .map(|conn_end| *conn_end.state())
        .map_err(|e| e.kind())
}

#[test_log::test]
fn conn_close_confirm_healthy() {
    assert_eq!(close_confirm_on_b(State::Closed, State::Open), Ok(State::Closed));
}

#[rstest]
#[test_log::test]
#[case::counterparty_open(State::Open, State::Open, ErrorKind::ProofVerificationFailed)]
#[case::already_closed(State::Closed, State::Closed, ErrorKind::InvalidState)]
fn conn_close_confirm_fails(
    #[case] state_on_a: State,
    #[case] state_on_b: State,
    #[case] kind: ErrorKind,
) {
    assert_eq!(close_confirm_on_b(state_on_a, state_on_b), Err(kind));
}
