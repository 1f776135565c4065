use ibc_handshake_core::client::types::TimeoutHeight;
use ibc_handshake_core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenInit};
use ibc_handshake_core::connection::types::State;
use ibc_handshake_core::connection::ConnectionHandshake;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::ValidationContext;
use ibc_handshake_testkit::fixtures::core::connection::{
    client_id_on_a, conn_id_on_a, dummy_conn_end_on_a, dummy_counterparty_of_a,
    dummy_msg_conn_open_init, timeout_at, DEFAULT_TIMEOUT_HEIGHT,
};
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

enum Ctx {
    Default,
    WithClient,
    WithConnection(State),
}

fn conn_open_init_fixture(ctx_variant: Ctx) -> Fixture<MsgConnectionOpenInit> {
    let with_client = || {
        let header = MockContext::default()
            .latest_header()
            .expect("committed block");
        MockContext::default().with_client(&client_id_on_a(), header)
    };

    let ctx = match ctx_variant {
        Ctx::Default => MockContext::default(),
        Ctx::WithClient => with_client(),
        Ctx::WithConnection(state) => with_client()
            .with_connection(conn_id_on_a(), dummy_conn_end_on_a(state, TimeoutHeight::Never)),
    };

    Fixture {
        ctx,
        msg: dummy_msg_conn_open_init(),
    }
}

fn conn_open_init_validate(fxt: &Fixture<MsgConnectionOpenInit>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenInit(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

fn conn_open_init_execute(fxt: &mut Fixture<MsgConnectionOpenInit>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenInit(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "execution", &res);

    assert!(expect.matches(&res), "{err_msg}");

    if let Expect::Success = expect {
        let conn_end = fxt
            .ctx
            .connection_end(&conn_id_on_a())
            .expect("connection was stored");

        assert_eq!(conn_end.state(), &State::Init);
        assert_eq!(conn_end.client_id(), &client_id_on_a());
        assert_eq!(conn_end.counterparty(), &dummy_counterparty_of_a());
        assert_eq!(
            conn_end.next_timeout_height(),
            &timeout_at(DEFAULT_TIMEOUT_HEIGHT)
        );

        let events = fxt.ctx.get_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            IbcEvent::Message(MessageEvent::Connection)
        ));
        assert!(matches!(events[1], IbcEvent::OpenInitConnection(_)));
        assert!(!fxt.ctx.get_logs().is_empty());
    }
}

#[test_log::test]
fn conn_open_init_healthy() {
    let mut fxt = conn_open_init_fixture(Ctx::WithClient);
    conn_open_init_validate(&fxt, Expect::Success);
    conn_open_init_execute(&mut fxt, Expect::Success);
}

#[test_log::test]
fn conn_open_init_over_closed_connection() {
    let mut fxt = conn_open_init_fixture(Ctx::WithConnection(State::Closed));
    conn_open_init_validate(&fxt, Expect::Success);
    conn_open_init_execute(&mut fxt, Expect::Success);
}

#[test_log::test]
fn conn_open_init_no_client() {
    let fxt = conn_open_init_fixture(Ctx::Default);
    conn_open_init_validate(&fxt, Expect::Failure(Some(ErrorKind::NotFound)));
}

#[rstest]
#[test_log::test]
#[case::init(State::Init)]
#[case::try_open(State::TryOpen)]
#[case::open(State::Open)]
fn conn_open_init_over_live_connection(#[case] state: State) {
    let fxt = conn_open_init_fixture(Ctx::WithConnection(state));
    conn_open_init_validate(&fxt, Expect::Failure(Some(ErrorKind::AlreadyExists)));
}

#[test_log::test]
fn conn_open_init_twice() {
    let mut fxt = conn_open_init_fixture(Ctx::WithClient);

    let first = fxt.ctx.conn_open_init(fxt.msg.clone());
    assert!(first.is_ok(), "{first:?}");

    let second = fxt.ctx.conn_open_init(fxt.msg.clone());
    assert!(
        Expect::Failure(Some(ErrorKind::AlreadyExists)).matches(&second),
        "{second:?}"
    );

    let conn_end = fxt
        .ctx
        .query_connection(&conn_id_on_a())
        .expect("connection was stored");
    assert_eq!(conn_end, first.expect("first init succeeded"));
}
