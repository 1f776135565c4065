use ibc_handshake_channel::handler::chan_close_confirm::{
    chan_close_confirm_execute, chan_close_confirm_validate,
};
use ibc_handshake_channel::handler::chan_close_init::{
    chan_close_init_execute, chan_close_init_validate,
};
use ibc_handshake_channel::handler::chan_open_ack::{chan_open_ack_execute, chan_open_ack_validate};
use ibc_handshake_channel::handler::chan_open_confirm::{
    chan_open_confirm_execute, chan_open_confirm_validate,
};
use ibc_handshake_channel::handler::chan_open_init::{
    chan_open_init_execute, chan_open_init_validate,
};
use ibc_handshake_channel::handler::chan_open_timeout::{
    chan_open_timeout_execute, chan_open_timeout_validate,
};
use ibc_handshake_channel::handler::chan_open_try::{chan_open_try_execute, chan_open_try_validate};
use ibc_handshake_channel::types::msgs::ChannelMsg;
use ibc_handshake_client::context::{ClientExecutionContext, ClientValidationContext};
use ibc_handshake_client::handler::{create_client, update_client};
use ibc_handshake_client::types::error::ClientError;
use ibc_handshake_client::types::msgs::ClientMsg;
use ibc_handshake_connection::handler::{
    conn_close_confirm, conn_close_init, conn_open_ack, conn_open_confirm, conn_open_init,
    conn_open_timeout, conn_open_try,
};
use ibc_handshake_connection::types::msgs::ConnectionMsg;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_handler_types::msgs::MsgEnvelope;
use ibc_handshake_host::{ExecutionContext, ValidationContext};
use ibc_handshake_primitives::Any;
use tracing::debug;

/// Entrypoint which performs both validation and message execution
pub fn dispatch<Ctx>(ctx: &mut Ctx, msg: MsgEnvelope) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
    <<Ctx::V as ClientValidationContext>::ClientStateRef as TryFrom<Any>>::Error: Into<ClientError>,
    <<Ctx::E as ClientExecutionContext>::ClientStateMut as TryFrom<Any>>::Error: Into<ClientError>,
{
    validate(ctx, msg.clone())?;
    execute(ctx, msg)
}

/// Entrypoint which only performs message validation
///
/// If a transaction contains `n` messages `m_1` ... `m_n`, then
/// they MUST be processed as follows:
///     validate(m_1), execute(m_1), ..., validate(m_n), execute(m_n)
/// That is, the state transition of message `i` must be applied before
/// message `i+1` is validated. This is equivalent to calling
/// `dispatch()` on each successively.
pub fn validate<Ctx>(ctx: &Ctx, msg: MsgEnvelope) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
    <<Ctx::V as ClientValidationContext>::ClientStateRef as TryFrom<Any>>::Error: Into<ClientError>,
{
    debug!(?msg, "validating message");

    match msg {
        MsgEnvelope::Client(msg) => match msg {
            ClientMsg::CreateClient(msg) => create_client::validate(ctx, msg),
            ClientMsg::UpdateClient(msg) => update_client::validate(ctx, msg),
        },
        MsgEnvelope::Connection(msg) => match msg {
            ConnectionMsg::OpenInit(msg) => conn_open_init::validate(ctx, msg),
            ConnectionMsg::OpenTry(msg) => conn_open_try::validate(ctx, msg),
            ConnectionMsg::OpenAck(msg) => conn_open_ack::validate(ctx, msg),
            ConnectionMsg::OpenConfirm(msg) => conn_open_confirm::validate(ctx, &msg),
            ConnectionMsg::OpenTimeout(msg) => conn_open_timeout::validate(ctx, msg),
            ConnectionMsg::CloseInit(msg) => conn_close_init::validate(ctx, &msg),
            ConnectionMsg::CloseConfirm(msg) => conn_close_confirm::validate(ctx, &msg),
        },
        MsgEnvelope::Channel(msg) => match msg {
            ChannelMsg::OpenInit(msg) => chan_open_init_validate(ctx, msg),
            ChannelMsg::OpenTry(msg) => chan_open_try_validate(ctx, msg),
            ChannelMsg::OpenAck(msg) => chan_open_ack_validate(ctx, msg),
            ChannelMsg::OpenConfirm(msg) => chan_open_confirm_validate(ctx, msg),
            ChannelMsg::OpenTimeout(msg) => chan_open_timeout_validate(ctx, msg),
            ChannelMsg::CloseInit(msg) => chan_close_init_validate(ctx, msg),
            ChannelMsg::CloseConfirm(msg) => chan_close_confirm_validate(ctx, msg),
        },
    }
}

/// Entrypoint which only performs message execution
pub fn execute<Ctx>(ctx: &mut Ctx, msg: MsgEnvelope) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
    <<Ctx::E as ClientExecutionContext>::ClientStateMut as TryFrom<Any>>::Error: Into<ClientError>,
{
    debug!(?msg, "executing message");

    match msg {
        MsgEnvelope::Client(msg) => match msg {
            ClientMsg::CreateClient(msg) => create_client::execute(ctx, msg),
            ClientMsg::UpdateClient(msg) => update_client::execute(ctx, msg),
        },
        MsgEnvelope::Connection(msg) => match msg {
            ConnectionMsg::OpenInit(msg) => conn_open_init::execute(ctx, msg),
            ConnectionMsg::OpenTry(msg) => conn_open_try::execute(ctx, msg),
            ConnectionMsg::OpenAck(msg) => conn_open_ack::execute(ctx, msg),
            ConnectionMsg::OpenConfirm(msg) => conn_open_confirm::execute(ctx, &msg),
            ConnectionMsg::OpenTimeout(msg) => conn_open_timeout::execute(ctx, msg),
            ConnectionMsg::CloseInit(msg) => conn_close_init::execute(ctx, &msg),
            ConnectionMsg::CloseConfirm(msg) => conn_close_confirm::execute(ctx, &msg),
        },
        MsgEnvelope::Channel(msg) => match msg {
            ChannelMsg::OpenInit(msg) => chan_open_init_execute(ctx, msg),
            ChannelMsg::OpenTry(msg) => chan_open_try_execute(ctx, msg),
            ChannelMsg::OpenAck(msg) => chan_open_ack_execute(ctx, msg),
            ChannelMsg::OpenConfirm(msg) => chan_open_confirm_execute(ctx, msg),
            ChannelMsg::OpenTimeout(msg) => chan_open_timeout_execute(ctx, msg),
            ChannelMsg::CloseInit(msg) => chan_close_init_execute(ctx, msg),
            ChannelMsg::CloseConfirm(msg) => chan_close_confirm_execute(ctx, msg),
        },
    }
}
