use ibc_handshake_core::channel::types::channel::{Order, State};
use ibc_handshake_core::channel::types::msgs::{ChannelMsg, MsgChannelOpenAck};
use ibc_handshake_core::channel::ChannelHandshake;
use ibc_handshake_core::connection::types::State as ConnectionState;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::identifiers::Sequence;
use ibc_handshake_core::host::types::path::ChannelEndPath;
use ibc_handshake_testkit::fixtures::core::channel::{
    chan_id_on_a, chan_id_on_b, dummy_chan_end_on_a, dummy_chan_end_on_b,
    dummy_msg_chan_open_ack, dummy_msg_chan_open_init, port_id,
};
use ibc_handshake_testkit::fixtures::core::connection::{dummy_proof, timeout_at, DEFAULT_TIMEOUT_HEIGHT};
use ibc_handshake_testkit::fixtures::core::context::MockContextConfig;
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use rstest::*;

use super::{chain_a_with_connection, height};
use crate::core::commit_and_prove;

struct Setup {
    connection: ConnectionState,
    channel: Option<State>,
    garbage_proof: bool,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            connection: ConnectionState::Open,
            channel: Some(State::Init),
            garbage_proof: false,
        }
    }
}

#[fixture]
fn setup() -> Setup {
    Setup::default()
}

fn chan_open_ack_fixture(setup: Setup) -> Fixture<MsgChannelOpenAck> {
    let ctx_b = MockContextConfig::builder()
        .chain_name("mockB")
        .latest_height(height(6))
        .build()
        .with_channel(
            port_id(),
            chan_id_on_b(),
            dummy_chan_end_on_b(
                State::TryOpen,
                Order::Ordered,
                timeout_at(DEFAULT_TIMEOUT_HEIGHT),
            ),
        );
    let (ctx_b, proof, proof_height) =
        commit_and_prove(ctx_b, ChannelEndPath::new(&port_id(), &chan_id_on_b()));

    let mut ctx = chain_a_with_connection(setup.connection, &ctx_b, proof_height);
    if let Some(state) = setup.channel {
        ctx = ctx.with_channel(
            port_id(),
            chan_id_on_a(),
            dummy_chan_end_on_a(state, Order::Ordered, timeout_at(DEFAULT_TIMEOUT_HEIGHT)),
        );
    }

    let proof = if setup.garbage_proof {
        dummy_proof()
    } else {
        proof
    };

    Fixture {
        ctx,
        msg: dummy_msg_chan_open_ack(proof, proof_height),
    }
}

fn chan_open_ack_validate(fxt: &Fixture<MsgChannelOpenAck>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Channel(ChannelMsg::OpenAck(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

#[rstest]
#[test_log::test]
fn chan_open_ack_healthy(setup: Setup) {
    let mut fxt = chan_open_ack_fixture(setup);
    chan_open_ack_validate(&fxt, Expect::Success);

    let msg_envelope = MsgEnvelope::Channel(ChannelMsg::OpenAck(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    assert!(
        res.is_ok(),
        "{}",
        fxt.generate_error_msg(&Expect::Success, "execution", &res)
    );

    let chan_end = fxt
        .ctx
        .query_channel(&port_id(), &chan_id_on_a())
        .expect("channel was stored");
    assert_eq!(chan_end.state(), &State::Open);
    assert_eq!(chan_end.ordering(), &Order::Ordered);
    assert_eq!(
        chan_end.next_timeout_height(),
        &timeout_at(DEFAULT_TIMEOUT_HEIGHT)
    );

    for sequence in [
        fxt.ctx
            .next_sequence_send(&port_id(), &chan_id_on_a())
            .expect("counter was written"),
        fxt.ctx
            .next_sequence_recv(&port_id(), &chan_id_on_a())
            .expect("counter was written"),
    ] {
        assert_eq!(sequence.value(), 1);
    }

    let events = fxt.ctx.get_events();
    assert!(matches!(events[0], IbcEvent::Message(MessageEvent::Channel)));
    assert!(matches!(events[1], IbcEvent::OpenAckChannel(_)));
}

#[rstest]
#[test_log::test]
fn chan_open_ack_no_channel(setup: Setup) {
    let fxt = chan_open_ack_fixture(Setup {
        channel: None,
        ..setup
    });
    chan_open_ack_validate(&fxt, Expect::Failure(Some(ErrorKind::NotFound)));
}

#[rstest]
#[test_log::test]
fn chan_open_ack_connection_not_open(setup: Setup) {
    let fxt = chan_open_ack_fixture(Setup {
        connection: ConnectionState::TryOpen,
        ..setup
    });
    chan_open_ack_validate(&fxt, Expect::Failure(Some(ErrorKind::ConnectionNotOpen)));
}

#[rstest]
#[test_log::test]
#[case::try_open(State::TryOpen)]
#[case::open(State::Open)]
#[case::closed(State::Closed)]
fn chan_open_ack_wrong_state(setup: Setup, #[case] state: State) {
    let fxt = chan_open_ack_fixture(Setup {
        channel: Some(state),
        ..setup
    });
    chan_open_ack_validate(&fxt, Expect::Failure(Some(ErrorKind::InvalidState)));
}

#[rstest]
#[test_log::test]
fn chan_open_ack_garbage_proof(setup: Setup) {
    let fxt = chan_open_ack_fixture(Setup {
        garbage_proof: true,
        ..setup
    });
    chan_open_ack_validate(&fxt, Expect::Failure(Some(ErrorKind::ProofVerificationFailed)));
}

#[rstest]
#[test_log::test]
fn reopened_channel_keeps_its_counters(setup: Setup) {
    let Fixture { ctx, msg } = chan_open_ack_fixture(Setup {
        channel: Some(State::Closed),
        ..setup
    });
    let mut ctx = ctx
        .with_send_sequence(port_id(), chan_id_on_a(), Sequence::from(4))
        .with_recv_sequence(port_id(), chan_id_on_a(), Sequence::from(3));

    let chan_end = ctx
        .chan_open_init(dummy_msg_chan_open_init(Order::Ordered))
        .expect("closed channel is initialised again");
    assert_eq!(chan_end.state(), &State::Init);

    let chan_end = ctx.chan_open_ack(msg).expect("counterparty is in try-open");
    assert_eq!(chan_end.state(), &State::Open);

    assert_eq!(
        ctx.next_sequence_send(&port_id(), &chan_id_on_a())
            .expect("counter is kept"),
        Sequence::from(4)
    );
    assert_eq!(
        ctx.next_sequence_recv(&port_id(), &chan_id_on_a())
            .expect("counter is kept"),
        Sequence::from(3)
    );
    assert_eq!(
        ctx.send_next_sequence(&port_id(), &chan_id_on_a())
            .expect("channel is open"),
        Sequence::from(4)
    );
}
