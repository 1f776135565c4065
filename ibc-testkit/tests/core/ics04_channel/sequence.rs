use ibc_handshake_core::channel::types::channel::{Order, State};
use ibc_handshake_core::channel::ChannelHandshake;
use ibc_handshake_core::client::types::TimeoutHeight;
use ibc_handshake_core::connection::types::State as ConnectionState;
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::host::types::identifiers::Sequence;
use ibc_handshake_testkit::fixtures::core::channel::{
    chan_id_on_a, dummy_chan_end_on_a, dummy_msg_chan_close_init, port_id,
};
use ibc_handshake_testkit::fixtures::core::connection::{conn_id_on_a, dummy_conn_end_on_a};
use ibc_handshake_testkit::fixtures::Expect;
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

/// Chain A holding `chanA` open with both counters at 1, as left by the
/// handshake.
fn open_channel(ordering: Order) -> MockContext {
    MockContext::default()
        .with_connection(
            conn_id_on_a(),
            dummy_conn_end_on_a(ConnectionState::Open, TimeoutHeight::Never),
        )
        .with_channel(
            port_id(),
            chan_id_on_a(),
            dummy_chan_end_on_a(State::Open, ordering, TimeoutHeight::Never),
        )
        .with_send_sequence(port_id(), chan_id_on_a(), Sequence::from(1))
        .with_recv_sequence(port_id(), chan_id_on_a(), Sequence::from(1))
}

#[test_log::test]
fn send_sequence_is_strictly_increasing() {
    let mut ctx = open_channel(Order::Unordered);

    let assigned: Vec<u64> = (0..4)
        .map(|_| {
            ctx.send_next_sequence(&port_id(), &chan_id_on_a())
                .expect("channel is open")
                .value()
        })
        .collect();

    assert_eq!(assigned, vec![1, 2, 3, 4]);
    assert_eq!(
        ctx.next_sequence_send(&port_id(), &chan_id_on_a())
            .expect("counter exists")
            .value(),
        5
    );
}

#[test_log::test]
fn ordered_channel_receives_in_order() {
    let mut ctx = open_channel(Order::Ordered);

    for sequence in 1..=3u64 {
        let next = ctx
            .advance_sequence_recv(&port_id(), &chan_id_on_a(), Sequence::from(sequence))
            .expect("sequence is the expected one");
        assert_eq!(next.value(), sequence + 1);
    }
}

#[rstest]
#[test_log::test]
#[case::skipped(Order::Ordered, 2)]
#[case::zero_on_ordered(Order::Ordered, 0)]
#[case::zero_on_unordered(Order::Unordered, 0)]
fn receive_of_unexpected_sequence_fails(#[case] ordering: Order, #[case] sequence: u64) {
    let mut ctx = open_channel(ordering);

    let res = ctx.advance_sequence_recv(&port_id(), &chan_id_on_a(), Sequence::from(sequence));

    assert!(
        Expect::Failure(Some(ErrorKind::InvalidState)).matches(&res),
        "{res:?}"
    );
    assert_eq!(
        ctx.next_sequence_recv(&port_id(), &chan_id_on_a())
            .expect("counter exists"),
        Sequence::from(1)
    );
}

#[test_log::test]
fn unordered_receive_counter_never_decreases() {
    let mut ctx = open_channel(Order::Unordered);

    let marks: Vec<u64> = [5u64, 2, 7, 7]
        .into_iter()
        .map(|sequence| {
            ctx.advance_sequence_recv(&port_id(), &chan_id_on_a(), Sequence::from(sequence))
                .expect("any sequence is accepted")
                .value()
        })
        .collect();

    assert_eq!(marks, vec![6, 6, 8, 8]);
}

#[test_log::test]
fn counters_of_closed_channel_are_frozen() {
    let mut ctx = open_channel(Order::Unordered);
    ctx.send_next_sequence(&port_id(), &chan_id_on_a())
        .expect("channel is open");

    ctx.chan_close_init(dummy_msg_chan_close_init())
        .expect("channel closes");

    let res = ctx.send_next_sequence(&port_id(), &chan_id_on_a());
    assert!(
        Expect::Failure(Some(ErrorKind::ChannelNotOpen)).matches(&res),
        "{res:?}"
    );
    assert_eq!(
        ctx.next_sequence_send(&port_id(), &chan_id_on_a())
            .expect("counter is kept")
            .value(),
        2
    );
}
