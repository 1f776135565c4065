use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenTimeout};
use ibc_handshake_core::connection::types::State;
use ibc_handshake_core::connection::ConnectionHandshake;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::IbcEvent;
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::path::ConnectionPath;
use ibc_handshake_testkit::fixtures::core::connection::{
    client_id_on_a, client_id_on_b, conn_id_on_a, conn_id_on_b, dummy_conn_end_on_a,
    dummy_conn_end_on_b, dummy_msg_conn_open_init, dummy_msg_conn_open_timeout, timeout_at,
};
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

use crate::core::{chain_tracking, commit_and_prove};

fn height(revision_height: u64) -> Height {
    Height::new(0, revision_height).expect("Never fails")
}

enum CounterpartyCtx {
    /// Chain B never stored `connB`.
    Empty,
    /// Chain B stored `connB` in `TryOpen`.
    WithConnection,
}

/// Chain A holding `connA` in `state` with deadline `timeout`, tracking a
/// chain B which committed its block 13.
fn conn_open_timeout_fixture(
    state: State,
    timeout: TimeoutHeight,
    counterparty: CounterpartyCtx,
) -> Fixture<MsgConnectionOpenTimeout> {
    let ctx_b = chain_tracking(
        "mockB",
        height(12),
        &client_id_on_b(),
        &MockContext::default(),
        height(5),
    );
    let ctx_b = match counterparty {
        CounterpartyCtx::Empty => ctx_b,
        CounterpartyCtx::WithConnection => ctx_b.with_connection(
            conn_id_on_b(),
            dummy_conn_end_on_b(State::TryOpen, TimeoutHeight::Never),
        ),
    };
    let (ctx_b, proof, proof_height) = commit_and_prove(ctx_b, ConnectionPath::new(&conn_id_on_b()));

    let ctx = chain_tracking("mockA", height(20), &client_id_on_a(), &ctx_b, proof_height)
        .with_connection(conn_id_on_a(), dummy_conn_end_on_a(state, timeout));

    Fixture {
        ctx,
        msg: dummy_msg_conn_open_timeout(proof, proof_height),
    }
}

fn conn_open_timeout_validate(fxt: &Fixture<MsgConnectionOpenTimeout>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenTimeout(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

#[test_log::test]
fn conn_open_timeout_healthy() {
    let mut fxt = conn_open_timeout_fixture(State::Init, timeout_at(10), CounterpartyCtx::Empty);
    conn_open_timeout_validate(&fxt, Expect::Success);

    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenTimeout(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    assert!(
        res.is_ok(),
        "{}",
        fxt.generate_error_msg(&Expect::Success, "execution", &res)
    );

    let conn_end = fxt
        .ctx
        .query_connection(&conn_id_on_a())
        .expect("connection is still stored");
    assert_eq!(conn_end.state(), &State::Closed);
    assert_eq!(conn_end.next_timeout_height(), &TimeoutHeight::Never);
    assert!(matches!(
        fxt.ctx.get_events()[1],
        IbcEvent::OpenTimeoutConnection(_)
    ));
}

#[test_log::test]
fn timed_out_connection_can_be_initialised_again() {
    let Fixture { mut ctx, msg } =
        conn_open_timeout_fixture(State::Init, timeout_at(10), CounterpartyCtx::Empty);

    ctx.conn_open_timeout(msg).expect("timeout is proven");

    let conn_end = ctx
        .conn_open_init(dummy_msg_conn_open_init())
        .expect("closed identifier is reusable");
    assert_eq!(conn_end.state(), &State::Init);
}

#[rstest]
#[test_log::test]
#[case::deadline_not_passed(
    State::Init,
    timeout_at(13),
    CounterpartyCtx::Empty,
    ErrorKind::InvalidState
)]
#[case::no_deadline(
    State::Init,
    TimeoutHeight::Never,
    CounterpartyCtx::Empty,
    ErrorKind::InvalidState
)]
#[case::not_in_init(
    State::TryOpen,
    timeout_at(10),
    CounterpartyCtx::Empty,
    ErrorKind::InvalidState
)]
#[case::counterparty_stored_connection(
    State::Init,
    timeout_at(10),
    CounterpartyCtx::WithConnection,
    ErrorKind::ProofVerificationFailed
)]
fn conn_open_timeout_fails(
    #[case] state: State,
    #[case] timeout: TimeoutHeight,
    #[case] counterparty: CounterpartyCtx,
    #[case] kind: ErrorKind,
) {
    let fxt = conn_open_timeout_fixture(state, timeout, counterparty);
    conn_open_timeout_validate(&fxt, Expect::Failure(Some(kind)));
}
