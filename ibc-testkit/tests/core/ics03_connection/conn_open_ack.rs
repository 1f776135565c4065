use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenAck};
use ibc_handshake_core::connection::types::State;
use ibc_handshake_core::connection::ConnectionHandshake;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::path::ConnectionPath;
use ibc_handshake_testkit::fixtures::core::connection::{
    client_id_on_a, conn_id_on_a, conn_id_on_b, dummy_conn_end_on_a, dummy_conn_end_on_b,
    dummy_msg_conn_open_ack, dummy_proof, timeout_at, DEFAULT_TIMEOUT_HEIGHT,
};
use ibc_handshake_testkit::fixtures::core::context::MockContextConfig;
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use rstest::*;

use crate::core::{chain_tracking, commit_and_prove};

enum Ctx {
    Default,
    NoConnection,
    ConnectionIn(State),
}

enum Msg {
    Default,
    GarbageProof,
}

fn conn_open_ack_fixture(ctx_variant: Ctx, msg_variant: Msg) -> Fixture<MsgConnectionOpenAck> {
    let ctx_b = MockContextConfig::builder()
        .chain_name("mockB")
        .latest_height(Height::new(0, 7).expect("Never fails"))
        .build()
        .with_connection(
            conn_id_on_b(),
            dummy_conn_end_on_b(State::TryOpen, timeout_at(DEFAULT_TIMEOUT_HEIGHT)),
        );
    let (ctx_b, proof, proof_height) = commit_and_prove(ctx_b, ConnectionPath::new(&conn_id_on_b()));

    let ctx_a = chain_tracking(
        "mockA",
        Height::new(0, 10).expect("Never fails"),
        &client_id_on_a(),
        &ctx_b,
        proof_height,
    );

    let ctx = match ctx_variant {
        Ctx::Default => ctx_a.with_connection(
            conn_id_on_a(),
            dummy_conn_end_on_a(State::Init, timeout_at(DEFAULT_TIMEOUT_HEIGHT)),
        ),
        Ctx::NoConnection => ctx_a,
        Ctx::ConnectionIn(state) => {
            ctx_a.with_connection(conn_id_on_a(), dummy_conn_end_on_a(state, TimeoutHeight::Never))
        }
    };

    let msg = match msg_variant {
        Msg::Default => dummy_msg_conn_open_ack(proof, proof_height),
        Msg::GarbageProof => dummy_msg_conn_open_ack(dummy_proof(), proof_height),
    };

    Fixture { ctx, msg }
}

fn conn_open_ack_validate(fxt: &Fixture<MsgConnectionOpenAck>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenAck(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

fn conn_open_ack_execute(fxt: &mut Fixture<MsgConnectionOpenAck>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenAck(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "execution", &res);

    assert!(expect.matches(&res), "{err_msg}");

    if let Expect::Success = expect {
        let conn_end = fxt
            .ctx
            .query_connection(&conn_id_on_a())
            .expect("connection was stored");

        assert_eq!(conn_end.state(), &State::Open);
        assert_eq!(
            conn_end.next_timeout_height(),
            &timeout_at(DEFAULT_TIMEOUT_HEIGHT)
        );
        assert!(fxt
            .ctx
            .is_connection_available(&conn_id_on_a())
            .expect("no store failure"));

        let events = fxt.ctx.get_events();
        assert!(matches!(
            events[0],
            IbcEvent::Message(MessageEvent::Connection)
        ));
        assert!(matches!(events[1], IbcEvent::OpenAckConnection(_)));
    }
}

#[test_log::test]
fn conn_open_ack_healthy() {
    let mut fxt = conn_open_ack_fixture(Ctx::Default, Msg::Default);
    conn_open_ack_validate(&fxt, Expect::Success);
    conn_open_ack_execute(&mut fxt, Expect::Success);
}

#[rstest]
#[test_log::test]
#[case::no_connection(Ctx::NoConnection, Msg::Default, ErrorKind::NotFound)]
#[case::try_open(Ctx::ConnectionIn(State::TryOpen), Msg::Default, ErrorKind::InvalidState)]
#[case::open(Ctx::ConnectionIn(State::Open), Msg::Default, ErrorKind::InvalidState)]
#[case::closed(Ctx::ConnectionIn(State::Closed), Msg::Default, ErrorKind::InvalidState)]
#[case::garbage_proof(Ctx::Default, Msg::GarbageProof, ErrorKind::ProofVerificationFailed)]
fn conn_open_ack_fails(#[case] ctx: Ctx, #[case] msg: Msg, #[case] kind: ErrorKind) {
    let fxt = conn_open_ack_fixture(ctx, msg);
    conn_open_ack_validate(&fxt, Expect::Failure(Some(kind)));
}

#[test_log::test]
fn failed_conn_open_ack_leaves_connection_in_init() {
    let Fixture { mut ctx, msg } = conn_open_ack_fixture(Ctx::Default, Msg::GarbageProof);

    assert!(ctx.conn_open_ack(msg).is_err());

    let conn_end = ctx
        .query_connection(&conn_id_on_a())
        .expect("connection is still stored");
    assert_eq!(conn_end.state(), &State::Init);
    assert!(!ctx
        .is_connection_available(&conn_id_on_a())
        .expect("no store failure"));
}
