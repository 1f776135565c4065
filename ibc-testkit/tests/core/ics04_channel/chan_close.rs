use ibc_handshake_core::channel::types::channel::{Order, State};
use ibc_handshake_core::channel::ChannelHandshake;
use ibc_handshake_core::client::types::TimeoutHeight;
use ibc_handshake_core::connection::types::State as ConnectionState;
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::IbcEvent;
use ibc_handshake_core::host::types::path::ChannelEndPath;
use ibc_handshake_testkit::fixtures::core::channel::{
    chan_id_on_a, chan_id_on_b, dummy_chan_end_on_a, dummy_chan_end_on_b,
    dummy_msg_chan_close_confirm, dummy_msg_chan_close_init, port_id,
};
use ibc_handshake_testkit::fixtures::core::connection::{conn_id_on_a, dummy_conn_end_on_a};
use ibc_handshake_testkit::fixtures::Expect;
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

use super::chain_b_with_connection;
use crate::core::commit_and_prove;

fn chain_a_with_channel(connection: ConnectionState, channel: State) -> MockContext {
    MockContext::default()
        .with_connection(
            conn_id_on_a(),
            dummy_conn_end_on_a(connection, TimeoutHeight::Never),
        )
        .with_channel(
            port_id(),
            chan_id_on_a(),
            dummy_chan_end_on_a(channel, Order::Unordered, TimeoutHeight::Never),
        )
}

#[rstest]
#[test_log::test]
#[case::init(State::Init)]
#[case::try_open(State::TryOpen)]
#[case::open(State::Open)]
fn chan_close_init_closes_live_channel(#[case] state: State) {
    let mut ctx = chain_a_with_channel(ConnectionState::Open, state);

    let chan_end = ctx
        .chan_close_init(dummy_msg_chan_close_init())
        .expect("live channel closes");

    assert_eq!(chan_end.state(), &State::Closed);
    assert!(matches!(ctx.get_events()[1], IbcEvent::CloseInitChannel(_)));
    assert!(!ctx
        .is_channel_available(&port_id(), &chan_id_on_a())
        .expect("no store failure"));
}

#[rstest]
#[test_log::test]
#[case::already_closed(ConnectionState::Open, State::Closed, ErrorKind::InvalidState)]
#[case::connection_not_open(ConnectionState::TryOpen, State::Open, ErrorKind::ConnectionNotOpen)]
fn chan_close_init_fails(
    #[case] connection: ConnectionState,
    #[case] channel: State,
    #[case] kind: ErrorKind,
) {
    let mut ctx = chain_a_with_channel(connection, channel);

    let res = ctx.chan_close_init(dummy_msg_chan_close_init());

    assert!(Expect::Failure(Some(kind)).matches(&res), "{res:?}");
}

#[test_log::test]
fn chan_close_init_unknown_channel() {
    let mut ctx = MockContext::default().with_connection(
        conn_id_on_a(),
        dummy_conn_end_on_a(ConnectionState::Open, TimeoutHeight::Never),
    );

    let res = ctx.chan_close_init(dummy_msg_chan_close_init());

    assert!(
        Expect::Failure(Some(ErrorKind::NotFound)).matches(&res),
        "{res:?}"
    );
}

/// Chain B holding `chanB` open, tracking chain A after A committed `chanA`
/// in `state_on_a`, confirms the closing of the channel.
#[rstest]
#[test_log::test]
#[case::counterparty_closed(State::Closed, None)]
#[case::counterparty_open(State::Open, Some(ErrorKind::ProofVerificationFailed))]
fn chan_close_confirm(#[case] state_on_a: State, #[case] failure: Option<ErrorKind>) {
    let ctx_a = MockContext::default().with_channel(
        port_id(),
        chan_id_on_a(),
        dummy_chan_end_on_a(state_on_a, Order::Unordered, TimeoutHeight::Never),
    );
    let (ctx_a, proof, proof_height) =
        commit_and_prove(ctx_a, ChannelEndPath::new(&port_id(), &chan_id_on_a()));

    let mut ctx_b = chain_b_with_connection(ConnectionState::Open, &ctx_a, proof_height)
        .with_channel(
            port_id(),
            chan_id_on_b(),
            dummy_chan_end_on_b(State::Open, Order::Unordered, TimeoutHeight::Never),
        );

    let res = ctx_b.chan_close_confirm(dummy_msg_chan_close_confirm(proof, proof_height));

    match failure {
        None => {
            let chan_end = res.expect("counterparty is closed");
            assert_eq!(chan_end.state(), &State::Closed);
            assert!(matches!(
                ctx_b.get_events()[1],
                IbcEvent::CloseConfirmChannel(_)
            ));
        }
        Some(kind) => {
            assert!(Expect::Failure(Some(kind)).matches(&res), "{res:?}");
            assert!(ctx_b
                .is_channel_available(&port_id(), &chan_id_on_b())
                .expect("no store failure"));
        }
    }
}
