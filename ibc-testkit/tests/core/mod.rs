use ibc_handshake_core::channel::types::channel::{Order, State as ChannelState};
use ibc_handshake_core::channel::ChannelHandshake;
use ibc_handshake_core::client::types::{Height, TimeoutHeight};
use ibc_handshake_core::commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_core::connection::types::State as ConnectionState;
use ibc_handshake_core::connection::ConnectionHandshake;
use ibc_handshake_core::handler::types::events::IbcEvent;
use ibc_handshake_core::host::types::identifiers::ClientId;
use ibc_handshake_core::host::types::path::Path;
use ibc_handshake_testkit::fixtures::core::channel::{chan_id_on_a, chan_id_on_b, port_id};
use ibc_handshake_testkit::fixtures::core::connection::{
    client_id_on_a, client_id_on_b, conn_id_on_a, conn_id_on_b, timeout_at,
    DEFAULT_TIMEOUT_HEIGHT,
};
use ibc_handshake_testkit::fixtures::core::context::MockContextConfig;
use ibc_handshake_testkit::relayer::context::RelayerContext;
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;

pub mod ics03_connection;

/// Commits the pending block of `ctx` and proves `path` at the new height.
pub fn commit_and_prove(
    mut ctx: MockContext,
    path: impl Into<Path>,
) -> (MockContext, CommitmentProofBytes, Height) {
    let height = ctx.advance_block();
    let proof = ctx.prove(height, path).expect("committed block");
    (ctx, proof, height)
}

/// Returns a chain named `name` at `latest_height`, holding a client
/// `client_id` which tracks `counterparty` up to its block at `height`.
pub fn chain_tracking(
    name: &str,
    latest_height: Height,
    client_id: &ClientId,
    counterparty: &MockContext,
    height: Height,
) -> MockContext {
    let header = counterparty.header_at(height).expect("committed block");

    MockContextConfig::builder()
        .chain_name(name)
        .latest_height(latest_height)
        .build()
        .with_client(client_id, header)
}

/// Returns two chains, each with a client tracking the other.
pub fn relayer_with_clients() -> RelayerContext {
    let ctx_a = MockContextConfig::builder().chain_name("mockA").build();
    let ctx_b = MockContextConfig::builder()
        .chain_name("mockB")
        .latest_height(Height::new(0, 8).expect("Never fails"))
        .build();

    let mut relayer = RelayerContext::new(ctx_a, ctx_b);

    relayer
        .create_client_on_a(client_id_on_a())
        .expect("client on A");
    relayer
        .create_client_on_b(client_id_on_b())
        .expect("client on B");

    relayer
}

#[test_log::test]
fn connection_and_channel_open_end_to_end() {
    let mut relayer = relayer_with_clients();
    let timeout = timeout_at(DEFAULT_TIMEOUT_HEIGHT);

    assert!(!relayer
        .get_ctx_a()
        .is_connection_available(&conn_id_on_a())
        .expect("no store failure"));

    relayer
        .create_connection_on_a(
            conn_id_on_a(),
            client_id_on_a(),
            conn_id_on_b(),
            client_id_on_b(),
            timeout,
        )
        .expect("connection opens");

    let conn_end_on_a = relayer
        .get_ctx_a()
        .query_connection(&conn_id_on_a())
        .expect("connection on A");
    let conn_end_on_b = relayer
        .get_ctx_b()
        .query_connection(&conn_id_on_b())
        .expect("connection on B");

    assert_eq!(conn_end_on_a.state(), &ConnectionState::Open);
    assert_eq!(conn_end_on_b.state(), &ConnectionState::Open);
    assert_eq!(conn_end_on_a.client_id(), &client_id_on_a());
    assert_eq!(conn_end_on_b.client_id(), &client_id_on_b());
    assert_eq!(conn_end_on_a.counterparty().connection_id(), &conn_id_on_b());
    assert_eq!(conn_end_on_b.counterparty().connection_id(), &conn_id_on_a());
    assert_eq!(conn_end_on_a.next_timeout_height(), &timeout);
    assert_eq!(conn_end_on_b.next_timeout_height(), &TimeoutHeight::Never);
    assert!(relayer
        .get_ctx_a()
        .is_connection_available(&conn_id_on_a())
        .expect("no store failure"));

    relayer
        .create_channel_on_a(
            conn_id_on_a(),
            port_id(),
            chan_id_on_a(),
            conn_id_on_b(),
            port_id(),
            chan_id_on_b(),
            Order::Unordered,
            timeout,
        )
        .expect("channel opens");

    let ctx_a = relayer.get_ctx_a_mut();
    let chan_end_on_a = ctx_a
        .query_channel(&port_id(), &chan_id_on_a())
        .expect("channel on A");

    assert_eq!(chan_end_on_a.state(), &ChannelState::Open);
    assert_eq!(chan_end_on_a.connection_id(), &conn_id_on_a());
    assert_eq!(chan_end_on_a.counterparty().channel_id(), &chan_id_on_b());
    assert!(ctx_a
        .is_channel_available(&port_id(), &chan_id_on_a())
        .expect("no store failure"));
    assert_eq!(
        ctx_a
            .send_next_sequence(&port_id(), &chan_id_on_a())
            .expect("open channel")
            .value(),
        1
    );

    let ctx_b = relayer.get_ctx_b();
    assert_eq!(
        ctx_b
            .next_sequence_recv(&port_id(), &chan_id_on_b())
            .expect("open channel")
            .value(),
        1
    );

    let open_events = ctx_b
        .get_events()
        .iter()
        .filter(|event| {
            matches!(
                event,
                IbcEvent::OpenTryConnection(_)
                    | IbcEvent::OpenConfirmConnection(_)
                    | IbcEvent::OpenTryChannel(_)
                    | IbcEvent::OpenConfirmChannel(_)
            )
        })
        .count();
    assert_eq!(open_events, 4);
}

#[test_log::test]
fn connection_opens_when_started_on_b() {
    let mut relayer = relayer_with_clients();

    relayer
        .create_connection_on_b(
            conn_id_on_b(),
            client_id_on_b(),
            conn_id_on_a(),
            client_id_on_a(),
            timeout_at(DEFAULT_TIMEOUT_HEIGHT),
        )
        .expect("connection opens");

    let (ctx_a, ctx_b) = relayer.into_inner();

    assert!(ctx_a
        .is_connection_available(&conn_id_on_a())
        .expect("no store failure"));
    assert!(ctx_b
        .is_connection_available(&conn_id_on_b())
        .expect("no store failure"));
}
