use ibc_handshake_core::client::context::ClientValidationContext;
use ibc_handshake_core::client::types::msgs::{ClientMsg, MsgUpdateClient};
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::types::path::ClientConsensusStatePath;
use ibc_handshake_core::host::ValidationContext;
use ibc_handshake_testkit::fixtures::core::client::dummy_msg_update_client;
use ibc_handshake_testkit::fixtures::core::connection::{client_id_on_a, client_id_on_b};
use ibc_handshake_testkit::fixtures::core::context::MockContextConfig;
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use ibc_handshake_testkit::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

const TRUSTED_HEIGHT: u64 = 8;
const COUNTERPARTY_HEIGHT: u64 = 12;

fn height(revision_height: u64) -> Height {
    Height::new(0, revision_height).expect("Never fails")
}

fn counterparty() -> MockContext {
    MockContextConfig::builder()
        .chain_name("mockB")
        .latest_height(height(COUNTERPARTY_HEIGHT))
        .build()
}

/// A chain holding `clientAtoB`, which trusts the counterparty at height 8,
/// and an update of that client to the counterparty block at `target`.
fn update_client_fixture(target: u64) -> Fixture<MsgUpdateClient> {
    let ctx_b = counterparty();

    let ctx = MockContext::default().with_client(
        &client_id_on_a(),
        ctx_b
            .header_at(height(TRUSTED_HEIGHT))
            .expect("committed block"),
    );
    let msg = dummy_msg_update_client(
        client_id_on_a(),
        ctx_b.header_at(height(target)).expect("committed block"),
    );

    Fixture { ctx, msg }
}

#[test_log::test]
fn update_client_happy_path() {
    let mut fxt = update_client_fixture(COUNTERPARTY_HEIGHT);

    let res = validate(
        &fxt.ctx,
        MsgEnvelope::from(ClientMsg::from(fxt.msg.clone())),
    );
    assert!(
        Expect::Success.matches(&res),
        "{}",
        fxt.generate_error_msg(&Expect::Success, "validation", &res)
    );

    let res = execute(
        &mut fxt.ctx,
        MsgEnvelope::from(ClientMsg::from(fxt.msg.clone())),
    );
    assert!(
        res.is_ok(),
        "{}",
        fxt.generate_error_msg(&Expect::Success, "execution", &res)
    );

    let client_val_ctx = fxt.ctx.get_client_validation_context();
    let client_state = client_val_ctx
        .client_state(&client_id_on_a())
        .expect("client exists");
    assert_eq!(client_state.latest_height, height(COUNTERPARTY_HEIGHT));

    let consensus_state = client_val_ctx
        .consensus_state(&ClientConsensusStatePath::new(
            client_id_on_a(),
            0,
            COUNTERPARTY_HEIGHT,
        ))
        .expect("consensus state was stored");
    assert_eq!(
        consensus_state,
        MockConsensusState::new(
            counterparty()
                .root_at(height(COUNTERPARTY_HEIGHT))
                .expect("committed block")
        )
    );

    let events = fxt.ctx.get_events();
    assert!(matches!(events[0], IbcEvent::Message(MessageEvent::Client)));
    assert!(matches!(events[1], IbcEvent::UpdateClient(_)));
}

#[rstest]
#[test_log::test]
#[case::same_height(TRUSTED_HEIGHT)]
#[case::older_height(TRUSTED_HEIGHT - 2)]
fn update_client_to_stale_header_fails(#[case] target: u64) {
    let fxt = update_client_fixture(target);

    let res = validate(
        &fxt.ctx,
        MsgEnvelope::from(ClientMsg::from(fxt.msg.clone())),
    );
    let expect = Expect::Failure(Some(ErrorKind::InvalidState));

    assert!(
        expect.matches(&res),
        "{}",
        fxt.generate_error_msg(&expect, "validation", &res)
    );
}

#[test_log::test]
fn update_unknown_client_fails() {
    let mut fxt = update_client_fixture(COUNTERPARTY_HEIGHT);
    fxt.msg.client_id = client_id_on_b();

    let res = validate(
        &fxt.ctx,
        MsgEnvelope::from(ClientMsg::from(fxt.msg.clone())),
    );
    let expect = Expect::Failure(Some(ErrorKind::NotFound));

    assert!(
        expect.matches(&res),
        "{}",
        fxt.generate_error_msg(&expect, "validation", &res)
    );
}
