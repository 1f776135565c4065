use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenTry};
use ibc_handshake_core::connection::types::State;
use ibc_handshake_core::connection::ConnectionHandshake;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::path::ConnectionPath;
use ibc_handshake_testkit::fixtures::core::connection::{
    client_id_on_b, conn_id_on_a, conn_id_on_b, dummy_conn_end_on_a, dummy_conn_end_on_b,
    dummy_counterparty_of_b, dummy_msg_conn_open_try, dummy_proof, timeout_at,
    DEFAULT_TIMEOUT_HEIGHT,
};
use ibc_handshake_testkit::fixtures::core::context::MockContextConfig;
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

use crate::core::{chain_tracking, commit_and_prove};

enum Ctx {
    Default,
    Expired,
    NoClient,
    WithConnection(State),
}

enum Msg {
    Default,
    GarbageProof,
    ProofHeightAhead,
    OtherTimeout,
}

fn height(revision_height: u64) -> Height {
    Height::new(0, revision_height).expect("Never fails")
}

fn conn_open_try_fixture(ctx_variant: Ctx, msg_variant: Msg) -> Fixture<MsgConnectionOpenTry> {
    let ctx_a = MockContextConfig::builder().chain_name("mockA").build().with_connection(
        conn_id_on_a(),
        dummy_conn_end_on_a(State::Init, timeout_at(DEFAULT_TIMEOUT_HEIGHT)),
    );
    let (ctx_a, proof, proof_height) = commit_and_prove(ctx_a, ConnectionPath::new(&conn_id_on_a()));

    let host_height = match ctx_variant {
        Ctx::Expired => height(DEFAULT_TIMEOUT_HEIGHT + 1),
        _ => height(10),
    };

    let ctx = match ctx_variant {
        Ctx::NoClient => MockContextConfig::builder().chain_name("mockB").build(),
        Ctx::WithConnection(state) => {
            chain_tracking("mockB", host_height, &client_id_on_b(), &ctx_a, proof_height)
                .with_connection(conn_id_on_b(), dummy_conn_end_on_b(state, TimeoutHeight::Never))
        }
        Ctx::Default | Ctx::Expired => {
            chain_tracking("mockB", host_height, &client_id_on_b(), &ctx_a, proof_height)
        }
    };

    let msg = match msg_variant {
        Msg::Default => dummy_msg_conn_open_try(proof, proof_height),
        Msg::GarbageProof => dummy_msg_conn_open_try(dummy_proof(), proof_height),
        Msg::ProofHeightAhead => dummy_msg_conn_open_try(proof, proof_height.increment()),
        Msg::OtherTimeout => MsgConnectionOpenTry {
            timeout_height_on_a: timeout_at(DEFAULT_TIMEOUT_HEIGHT + 5),
            ..dummy_msg_conn_open_try(proof, proof_height)
        },
    };

    Fixture { ctx, msg }
}

fn conn_open_try_validate(fxt: &Fixture<MsgConnectionOpenTry>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenTry(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

fn conn_open_try_execute(fxt: &mut Fixture<MsgConnectionOpenTry>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenTry(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "execution", &res);

    assert!(expect.matches(&res), "{err_msg}");

    if let Expect::Success = expect {
        let conn_end = fxt
            .ctx
            .query_connection(&conn_id_on_b())
            .expect("connection was stored");

        assert_eq!(conn_end.state(), &State::TryOpen);
        assert_eq!(conn_end.client_id(), &client_id_on_b());
        assert_eq!(conn_end.counterparty(), &dummy_counterparty_of_b());
        assert_eq!(
            conn_end.next_timeout_height(),
            &timeout_at(DEFAULT_TIMEOUT_HEIGHT)
        );

        let events = fxt.ctx.get_events();
        assert!(matches!(
            events[0],
            IbcEvent::Message(MessageEvent::Connection)
        ));
        assert!(matches!(events[1], IbcEvent::OpenTryConnection(_)));
    }
}

#[test_log::test]
fn conn_open_try_healthy() {
    let mut fxt = conn_open_try_fixture(Ctx::Default, Msg::Default);
    conn_open_try_validate(&fxt, Expect::Success);
    conn_open_try_execute(&mut fxt, Expect::Success);
}

#[rstest]
#[test_log::test]
#[case::garbage_proof(Ctx::Default, Msg::GarbageProof, ErrorKind::ProofVerificationFailed)]
#[case::proof_height_ahead_of_client(
    Ctx::Default,
    Msg::ProofHeightAhead,
    ErrorKind::ProofVerificationFailed
)]
#[case::other_counterparty_timeout(
    Ctx::Default,
    Msg::OtherTimeout,
    ErrorKind::ProofVerificationFailed
)]
#[case::expired(Ctx::Expired, Msg::Default, ErrorKind::Expired)]
#[case::no_client(Ctx::NoClient, Msg::Default, ErrorKind::NotFound)]
#[case::duplicate(Ctx::WithConnection(State::TryOpen), Msg::Default, ErrorKind::AlreadyExists)]
#[case::already_open(Ctx::WithConnection(State::Open), Msg::Default, ErrorKind::AlreadyExists)]
#[case::over_closed_connection(
    Ctx::WithConnection(State::Closed),
    Msg::Default,
    ErrorKind::AlreadyExists
)]
fn conn_open_try_fails(#[case] ctx: Ctx, #[case] msg: Msg, #[case] kind: ErrorKind) {
    let fxt = conn_open_try_fixture(ctx, msg);
    conn_open_try_validate(&fxt, Expect::Failure(Some(kind)));
}

#[rstest]
#[test_log::test]
#[case::garbage_proof(Ctx::Default, Msg::GarbageProof)]
#[case::expired(Ctx::Expired, Msg::Default)]
fn failed_conn_open_try_stores_nothing(#[case] ctx: Ctx, #[case] msg: Msg) {
    let Fixture { mut ctx, msg } = conn_open_try_fixture(ctx, msg);

    assert!(ctx.conn_open_try(msg).is_err());

    let res = ctx.query_connection(&conn_id_on_b());
    assert!(
        Expect::Failure(Some(ErrorKind::NotFound)).matches(&res),
        "{res:?}"
    );
    assert!(ctx.get_events().is_empty());
    assert!(!ctx
        .is_connection_available(&conn_id_on_b())
        .expect("no store failure"));
}

#[test_log::test]
fn conn_open_try_on_chain_without_counterparty_record() {
    // Chain A never initialised `connA`: the proof is one of absence.
    let (ctx_a, proof, proof_height) = commit_and_prove(
        MockContext::default(),
        ConnectionPath::new(&conn_id_on_a()),
    );
    let ctx = chain_tracking("mockB", height(10), &client_id_on_b(), &ctx_a, proof_height);

    let fxt = Fixture {
        ctx,
        msg: dummy_msg_conn_open_try(proof, proof_height),
    };
    conn_open_try_validate(&fxt, Expect::Failure(Some(ErrorKind::ProofVerificationFailed)));
}
