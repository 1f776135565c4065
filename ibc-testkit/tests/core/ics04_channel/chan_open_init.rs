use ibc_handshake_core::channel::types::channel::{Order, State};
use ibc_handshake_core::channel::types::msgs::{ChannelMsg, MsgChannelOpenInit};
use ibc_handshake_core::channel::ChannelHandshake;
use ibc_handshake_core::client::types::TimeoutHeight;
use ibc_handshake_core::connection::types::State as ConnectionState;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_testkit::fixtures::core::channel::{
    chan_id_on_a, chan_id_on_b, dummy_chan_end_on_a, dummy_msg_chan_open_init, port_id,
};
use ibc_handshake_testkit::fixtures::core::connection::{
    conn_id_on_a, dummy_conn_end_on_a, timeout_at, DEFAULT_TIMEOUT_HEIGHT,
};
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

enum Ctx {
    NoConnection,
    Connection(ConnectionState),
    Channel(State),
}

fn chan_open_init_fixture(ctx_variant: Ctx) -> Fixture<MsgChannelOpenInit> {
    let with_connection = |state| {
        MockContext::default()
            .with_connection(conn_id_on_a(), dummy_conn_end_on_a(state, TimeoutHeight::Never))
    };

    let ctx = match ctx_variant {
        Ctx::NoConnection => MockContext::default(),
        Ctx::Connection(state) => with_connection(state),
        Ctx::Channel(state) => with_connection(ConnectionState::Open).with_channel(
            port_id(),
            chan_id_on_a(),
            dummy_chan_end_on_a(state, Order::Unordered, TimeoutHeight::Never),
        ),
    };

    Fixture {
        ctx,
        msg: dummy_msg_chan_open_init(Order::Unordered),
    }
}

fn chan_open_init_validate(fxt: &Fixture<MsgChannelOpenInit>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Channel(ChannelMsg::OpenInit(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

fn chan_open_init_execute(fxt: &mut Fixture<MsgChannelOpenInit>) {
    let msg_envelope = MsgEnvelope::Channel(ChannelMsg::OpenInit(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&Expect::Success, "execution", &res);

    assert!(res.is_ok(), "{err_msg}");

    let chan_end = fxt
        .ctx
        .query_channel(&port_id(), &chan_id_on_a())
        .expect("channel was stored");

    assert_eq!(chan_end.state(), &State::Init);
    assert_eq!(chan_end.ordering(), &Order::Unordered);
    assert_eq!(chan_end.connection_id(), &conn_id_on_a());
    assert_eq!(chan_end.counterparty().port_id(), &port_id());
    assert_eq!(chan_end.counterparty().channel_id(), &chan_id_on_b());
    assert_eq!(
        chan_end.next_timeout_height(),
        &timeout_at(DEFAULT_TIMEOUT_HEIGHT)
    );

    let events = fxt.ctx.get_events();
    assert!(matches!(events[0], IbcEvent::Message(MessageEvent::Channel)));
    assert!(matches!(events[1], IbcEvent::OpenInitChannel(_)));
}

#[test_log::test]
fn chan_open_init_healthy() {
    let mut fxt = chan_open_init_fixture(Ctx::Connection(ConnectionState::Open));
    chan_open_init_validate(&fxt, Expect::Success);
    chan_open_init_execute(&mut fxt);
}

#[test_log::test]
fn chan_open_init_over_closed_channel() {
    let mut fxt = chan_open_init_fixture(Ctx::Channel(State::Closed));
    chan_open_init_validate(&fxt, Expect::Success);
    chan_open_init_execute(&mut fxt);
}

#[rstest]
#[test_log::test]
#[case::no_connection(Ctx::NoConnection, ErrorKind::ConnectionNotOpen)]
#[case::connection_init(Ctx::Connection(ConnectionState::Init), ErrorKind::ConnectionNotOpen)]
#[case::connection_try_open(
    Ctx::Connection(ConnectionState::TryOpen),
    ErrorKind::ConnectionNotOpen
)]
#[case::connection_closed(Ctx::Connection(ConnectionState::Closed), ErrorKind::ConnectionNotOpen)]
#[case::channel_init(Ctx::Channel(State::Init), ErrorKind::AlreadyExists)]
#[case::channel_open(Ctx::Channel(State::Open), ErrorKind::AlreadyExists)]
fn chan_open_init_fails(#[case] ctx: Ctx, #[case] kind: ErrorKind) {
    let fxt = chan_open_init_fixture(ctx);
    chan_open_init_validate(&fxt, Expect::Failure(Some(kind)));
}

#[test_log::test]
fn channel_is_unavailable_until_open() {
    let mut fxt = chan_open_init_fixture(Ctx::Connection(ConnectionState::Open));

    assert!(!fxt
        .ctx
        .is_channel_available(&port_id(), &chan_id_on_a())
        .expect("no store failure"));

    fxt.ctx
        .chan_open_init(fxt.msg.clone())
        .expect("connection is open");

    assert!(!fxt
        .ctx
        .is_channel_available(&port_id(), &chan_id_on_a())
        .expect("no store failure"));

    let res = fxt.ctx.send_next_sequence(&port_id(), &chan_id_on_a());
    assert!(
        Expect::Failure(Some(ErrorKind::ChannelNotOpen)).matches(&res),
        "{res:?}"
    );
}
