use ibc_handshake_core::channel::types::channel::{Order, State};
use ibc_handshake_core::channel::types::msgs::{ChannelMsg, MsgChannelOpenTry};
use ibc_handshake_core::channel::ChannelHandshake;
use ibc_handshake_core::client::types::TimeoutHeight;
use ibc_handshake_core::connection::types::State as ConnectionState;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::path::ChannelEndPath;
use ibc_handshake_testkit::fixtures::core::channel::{
    chan_id_on_a, chan_id_on_b, dummy_chan_end_on_a, dummy_chan_end_on_b,
    dummy_msg_chan_open_try, port_id,
};
use ibc_handshake_testkit::fixtures::core::connection::{
    client_id_on_b, conn_id_on_b, dummy_conn_end_on_b, dummy_proof, timeout_at,
    DEFAULT_TIMEOUT_HEIGHT,
};
use ibc_handshake_testkit::fixtures::core::context::MockContextConfig;
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use rstest::*;

use super::{chain_b_with_connection, height};
use crate::core::{chain_tracking, commit_and_prove};

enum Ctx {
    Default,
    Connection(ConnectionState),
    Channel(State),
    Expired,
}

enum Msg {
    Default,
    OtherOrdering,
    GarbageProof,
}

fn ordering() -> Order {
    Order::Unordered
}

fn chan_open_try_fixture(ctx_variant: Ctx, msg_variant: Msg) -> Fixture<MsgChannelOpenTry> {
    let ctx_a = MockContextConfig::builder().build().with_channel(
        port_id(),
        chan_id_on_a(),
        dummy_chan_end_on_a(State::Init, ordering(), timeout_at(DEFAULT_TIMEOUT_HEIGHT)),
    );
    let (ctx_a, proof, proof_height) =
        commit_and_prove(ctx_a, ChannelEndPath::new(&port_id(), &chan_id_on_a()));

    let ctx = match ctx_variant {
        Ctx::Default => chain_b_with_connection(ConnectionState::Open, &ctx_a, proof_height),
        Ctx::Connection(state) => chain_b_with_connection(state, &ctx_a, proof_height),
        Ctx::Channel(state) => chain_b_with_connection(ConnectionState::Open, &ctx_a, proof_height)
            .with_channel(
                port_id(),
                chan_id_on_b(),
                dummy_chan_end_on_b(state, ordering(), TimeoutHeight::Never),
            ),
        Ctx::Expired => chain_tracking(
            "mockB",
            height(DEFAULT_TIMEOUT_HEIGHT + 1),
            &client_id_on_b(),
            &ctx_a,
            proof_height,
        )
        .with_connection(
            conn_id_on_b(),
            dummy_conn_end_on_b(ConnectionState::Open, TimeoutHeight::Never),
        ),
    };

    let msg = match msg_variant {
        Msg::Default => dummy_msg_chan_open_try(ordering(), proof, proof_height),
        Msg::OtherOrdering => dummy_msg_chan_open_try(Order::Ordered, proof, proof_height),
        Msg::GarbageProof => dummy_msg_chan_open_try(ordering(), dummy_proof(), proof_height),
    };

    Fixture { ctx, msg }
}

fn chan_open_try_validate(fxt: &Fixture<MsgChannelOpenTry>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Channel(ChannelMsg::OpenTry(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

#[test_log::test]
fn chan_open_try_healthy() {
    let mut fxt = chan_open_try_fixture(Ctx::Default, Msg::Default);
    chan_open_try_validate(&fxt, Expect::Success);

    let msg_envelope = MsgEnvelope::Channel(ChannelMsg::OpenTry(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    assert!(
        res.is_ok(),
        "{}",
        fxt.generate_error_msg(&Expect::Success, "execution", &res)
    );

    let chan_end = fxt
        .ctx
        .query_channel(&port_id(), &chan_id_on_b())
        .expect("channel was stored");
    assert_eq!(
        chan_end,
        dummy_chan_end_on_b(
            State::TryOpen,
            ordering(),
            timeout_at(DEFAULT_TIMEOUT_HEIGHT)
        )
    );

    let events = fxt.ctx.get_events();
    assert!(matches!(events[0], IbcEvent::Message(MessageEvent::Channel)));
    assert!(matches!(events[1], IbcEvent::OpenTryChannel(_)));
}

#[rstest]
#[test_log::test]
#[case::connection_try_open(
    Ctx::Connection(ConnectionState::TryOpen),
    Msg::Default,
    ErrorKind::ConnectionNotOpen
)]
#[case::duplicate(Ctx::Channel(State::TryOpen), Msg::Default, ErrorKind::AlreadyExists)]
#[case::over_closed_channel(Ctx::Channel(State::Closed), Msg::Default, ErrorKind::AlreadyExists)]
#[case::expired(Ctx::Expired, Msg::Default, ErrorKind::Expired)]
#[case::other_ordering(Ctx::Default, Msg::OtherOrdering, ErrorKind::ProofVerificationFailed)]
#[case::garbage_proof(Ctx::Default, Msg::GarbageProof, ErrorKind::ProofVerificationFailed)]
fn chan_open_try_fails(#[case] ctx: Ctx, #[case] msg: Msg, #[case] kind: ErrorKind) {
    let fxt = chan_open_try_fixture(ctx, msg);
    chan_open_try_validate(&fxt, Expect::Failure(Some(kind)));
}

#[test_log::test]
fn chan_open_try_leaves_closed_channel_closed() {
    let Fixture { mut ctx, msg } = chan_open_try_fixture(Ctx::Channel(State::Closed), Msg::Default);

    let res = ctx.chan_open_try(msg);
    assert!(
        Expect::Failure(Some(ErrorKind::AlreadyExists)).matches(&res),
        "{res:?}"
    );

    let chan_end = ctx
        .query_channel(&port_id(), &chan_id_on_b())
        .expect("channel is kept");
    assert_eq!(chan_end.state(), &State::Closed);
}

#[test_log::test]
fn failed_chan_open_try_stores_nothing() {
    let Fixture { mut ctx, msg } = chan_open_try_fixture(Ctx::Expired, Msg::Default);

    assert!(ctx.chan_open_try(msg).is_err());

    let res = ctx.query_channel(&port_id(), &chan_id_on_b());
    assert!(
        Expect::Failure(Some(ErrorKind::NotFound)).matches(&res),
        "{res:?}"
    );
}
