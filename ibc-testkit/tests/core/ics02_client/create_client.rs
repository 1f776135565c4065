use ibc_handshake_core::client::context::ClientValidationContext;
use ibc_handshake_core::client::types::msgs::{ClientMsg, MsgCreateClient};
use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::entrypoint::{execute, validate};
use ibc_handshake_core::handler::types::error::ErrorKind;
use ibc_handshake_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_handshake_core::handler::types::msgs::MsgEnvelope;
use ibc_handshake_core::host::ValidationContext;
use ibc_handshake_core::primitives::Any;
use ibc_handshake_testkit::fixtures::core::client::dummy_msg_create_client;
use ibc_handshake_testkit::fixtures::core::connection::client_id_on_a;
use ibc_handshake_testkit::fixtures::core::context::MockContextConfig;
use ibc_handshake_testkit::fixtures::{Expect, Fixture};
use ibc_handshake_testkit::testapp::ibc::clients::mock::client_state::MockClientState;
use ibc_handshake_testkit::testapp::ibc::clients::mock::header::MockHeader;
use ibc_handshake_testkit::testapp::ibc::core::types::MockContext;
use rstest::*;

enum Ctx {
    Default,
    WithClient,
}

enum Msg {
    Default,
    WrongClientStateType,
}

fn counterparty_header() -> MockHeader {
    MockContextConfig::builder()
        .chain_name("mockB")
        .latest_height(Height::new(0, 12).expect("Never fails"))
        .build()
        .latest_header()
        .expect("committed block")
}

fn create_client_fixture(ctx_variant: Ctx, msg_variant: Msg) -> Fixture<MsgCreateClient> {
    let header = counterparty_header();

    let ctx = match ctx_variant {
        Ctx::Default => MockContext::default(),
        Ctx::WithClient => MockContext::default().with_client(&client_id_on_a(), header.clone()),
    };

    let mut msg = dummy_msg_create_client(client_id_on_a(), header.clone());
    if let Msg::WrongClientStateType = msg_variant {
        msg.client_state = Any::from(header);
    }

    Fixture { ctx, msg }
}

fn create_client_validate(fxt: &Fixture<MsgCreateClient>, expect: Expect) {
    let msg_envelope = MsgEnvelope::from(ClientMsg::from(fxt.msg.clone()));
    let res = validate(&fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);

    assert!(expect.matches(&res), "{err_msg}");
}

#[test_log::test]
fn create_client_happy_path() {
    let mut fxt = create_client_fixture(Ctx::Default, Msg::Default);
    create_client_validate(&fxt, Expect::Success);

    let msg_envelope = MsgEnvelope::from(ClientMsg::from(fxt.msg.clone()));
    let res = execute(&mut fxt.ctx, msg_envelope);
    let err_msg = fxt.generate_error_msg(&Expect::Success, "execution", &res);
    assert!(res.is_ok(), "{err_msg}");

    let client_state = fxt
        .ctx
        .get_client_validation_context()
        .client_state(&client_id_on_a())
        .expect("client was stored");
    assert_eq!(
        client_state,
        MockClientState::new(counterparty_header().height())
    );

    let events = fxt.ctx.get_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], IbcEvent::Message(MessageEvent::Client)));
    assert!(matches!(events[1], IbcEvent::CreateClient(_)));
}

#[rstest]
#[test_log::test]
#[case::existing_client(Ctx::WithClient, Msg::Default, Some(ErrorKind::AlreadyExists))]
#[case::wrong_client_state_type(Ctx::Default, Msg::WrongClientStateType, None)]
fn create_client_fails(#[case] ctx: Ctx, #[case] msg: Msg, #[case] kind: Option<ErrorKind>) {
    let fxt = create_client_fixture(ctx, msg);
    create_client_validate(&fxt, Expect::Failure(kind));
}
