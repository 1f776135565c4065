use ibc_handshake_core::channel::types::channel::{Order, State};
use ibc_handshake_core::channel::types::msgs::MsgChannelOpenTimeout;
use ibc_handshake_core::channel::ChannelHandshake;
use ibc_handshake_core::client::types::TimeoutHeight;
use ibc_handshake_core::connection::types::State as ConnectionState;
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::IbcEvent;
use ibc_handshake_core::host::types::path::ChannelEndPath;
use ibc_handshake_testkit::fixtures::core::channel::{
    chan_id_on_a, chan_id_on_b, dummy_chan_end_on_a, dummy_chan_end_on_b,
    dummy_msg_chan_open_init, dummy_msg_chan_open_timeout, port_id,
};
use ibc_handshake_testkit::fixtures::core::connection::{client_id_on_b, timeout_at};
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

use super::{chain_a_with_connection, height};
use crate::core::{chain_tracking, commit_and_prove};

/// Chain A holding `chanA` in `state` with deadline `timeout`, tracking a
/// chain B which committed its block 13, with or without `chanB`.
fn chan_open_timeout_fixture(
    state: State,
    timeout: TimeoutHeight,
    chan_on_b: bool,
) -> Fixture<MsgChannelOpenTimeout> {
    let mut ctx_b = chain_tracking(
        "mockB",
        height(12),
        &client_id_on_b(),
        &MockContext::default(),
        height(5),
    );
    if chan_on_b {
        ctx_b = ctx_b.with_channel(
            port_id(),
            chan_id_on_b(),
            dummy_chan_end_on_b(State::TryOpen, Order::Unordered, TimeoutHeight::Never),
        );
    }
    let (ctx_b, proof, proof_height) =
        commit_and_prove(ctx_b, ChannelEndPath::new(&port_id(), &chan_id_on_b()));

    let ctx = chain_a_with_connection(ConnectionState::Open, &ctx_b, proof_height).with_channel(
        port_id(),
        chan_id_on_a(),
        dummy_chan_end_on_a(state, Order::Unordered, timeout),
    );

    Fixture {
        ctx,
        msg: dummy_msg_chan_open_timeout(proof, proof_height),
    }
}

#[test_log::test]
fn chan_open_timeout_healthy() {
    let Fixture { mut ctx, msg } = chan_open_timeout_fixture(State::Init, timeout_at(10), false);

    let chan_end = ctx.chan_open_timeout(msg).expect("timeout is proven");

    assert_eq!(chan_end.state(), &State::Closed);
    assert_eq!(chan_end.next_timeout_height(), &TimeoutHeight::Never);
    assert!(matches!(
        ctx.get_events()[1],
        IbcEvent::OpenTimeoutChannel(_)
    ));

    let chan_end = ctx
        .chan_open_init(dummy_msg_chan_open_init(Order::Unordered))
        .expect("closed identifier is reusable");
    assert_eq!(chan_end.state(), &State::Init);
}

#[rstest]
#[test_log::test]
#[case::deadline_not_passed(State::Init, timeout_at(13), false, ErrorKind::InvalidState)]
#[case::no_deadline(State::Init, TimeoutHeight::Never, false, ErrorKind::InvalidState)]
#[case::not_in_init(State::TryOpen, timeout_at(10), false, ErrorKind::InvalidState)]
#[case::counterparty_stored_channel(
    State::Init,
    timeout_at(10),
    true,
    ErrorKind::ProofVerificationFailed
)]
fn chan_open_timeout_fails(
    #[case] state: State,
    #[case] timeout: TimeoutHeight,
    #[case] chan_on_b: bool,
    #[case] kind: ErrorKind,
) {
    let Fixture { mut ctx, msg } = chan_open_timeout_fixture(state, timeout, chan_on_b);

    let res = ctx.chan_open_timeout(msg);

    assert!(Expect::Failure(Some(kind)).matches(&res), "{res:?}");
    assert_eq!(
        ctx.query_channel(&port_id(), &chan_id_on_a())
            .expect("channel is still stored")
            .state(),
        &state
    );
}
