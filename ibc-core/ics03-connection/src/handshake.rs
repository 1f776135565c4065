use ibc_handshake_connection_types::msgs::{
    MsgConnectionCloseConfirm, MsgConnectionCloseInit, MsgConnectionOpenAck,
    MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTimeout,
    MsgConnectionOpenTry,
};
use ibc_handshake_connection_types::ConnectionEnd;
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_host::types::identifiers::ConnectionId;
use ibc_handshake_host::ExecutionContext;

use crate::handler::{
    conn_close_confirm, conn_close_init, conn_open_ack, conn_open_confirm, conn_open_init,
    conn_open_timeout, conn_open_try,
};

/// The connection handshake as a set of capabilities of a host chain.
///
/// Every advancing step validates all of its preconditions before the first
/// write and returns the record it stored. Implemented for every
/// [`ExecutionContext`].
pub trait ConnectionHandshake {
    fn conn_open_init(&mut self, msg: MsgConnectionOpenInit)
        -> Result<ConnectionEnd, HandlerError>;

    fn conn_open_try(&mut self, msg: MsgConnectionOpenTry) -> Result<ConnectionEnd, HandlerError>;

    fn conn_open_ack(&mut self, msg: MsgConnectionOpenAck) -> Result<ConnectionEnd, HandlerError>;

    fn conn_open_confirm(
        &mut self,
        msg: MsgConnectionOpenConfirm,
    ) -> Result<ConnectionEnd, HandlerError>;

    fn conn_open_timeout(
        &mut self,
        msg: MsgConnectionOpenTimeout,
    ) -> Result<ConnectionEnd, HandlerError>;

    fn conn_close_init(
        &mut self,
        msg: MsgConnectionCloseInit,
    ) -> Result<ConnectionEnd, HandlerError>;

    fn conn_close_confirm(
        &mut self,
        msg: MsgConnectionCloseConfirm,
    ) -> Result<ConnectionEnd, HandlerError>;

    /// Returns the record stored under `conn_id`, or a `NotFound` error.
    fn query_connection(&self, conn_id: &ConnectionId) -> Result<ConnectionEnd, HandlerError>;

    /// Returns `true` iff the connection exists and is open.
    fn is_connection_available(&self, conn_id: &ConnectionId) -> Result<bool, HandlerError>;
}

impl<Ctx> ConnectionHandshake for Ctx
where
    Ctx: ExecutionContext,
{
    fn conn_open_init(
        &mut self,
        msg: MsgConnectionOpenInit,
    ) -> Result<ConnectionEnd, HandlerError> {
        let conn_id = msg.conn_id_on_a.clone();
        conn_open_init::validate(self, msg.clone())?;
        conn_open_init::execute(self, msg)?;
        self.connection_end(&conn_id)
    }

    fn conn_open_try(&mut self, msg: MsgConnectionOpenTry) -> Result<ConnectionEnd, HandlerError> {
        let conn_id = msg.conn_id_on_b.clone();
        conn_open_try::validate(self, msg.clone())?;
        conn_open_try::execute(self, msg)?;
        self.connection_end(&conn_id)
    }

    fn conn_open_ack(&mut self, msg: MsgConnectionOpenAck) -> Result<ConnectionEnd, HandlerError> {
        let conn_id = msg.conn_id_on_a.clone();
        conn_open_ack::validate(self, msg.clone())?;
        conn_open_ack::execute(self, msg)?;
        self.connection_end(&conn_id)
    }

    fn conn_open_confirm(
        &mut self,
        msg: MsgConnectionOpenConfirm,
    ) -> Result<ConnectionEnd, HandlerError> {
        conn_open_confirm::validate(self, &msg)?;
        conn_open_confirm::execute(self, &msg)?;
        self.connection_end(&msg.conn_id_on_b)
    }

    fn conn_open_timeout(
        &mut self,
        msg: MsgConnectionOpenTimeout,
    ) -> Result<ConnectionEnd, HandlerError> {
        let conn_id = msg.conn_id_on_a.clone();
        conn_open_timeout::validate(self, msg.clone())?;
        conn_open_timeout::execute(self, msg)?;
        self.connection_end(&conn_id)
    }

    fn conn_close_init(
        &mut self,
        msg: MsgConnectionCloseInit,
    ) -> Result<ConnectionEnd, HandlerError> {
        conn_close_init::validate(self, &msg)?;
        conn_close_init::execute(self, &msg)?;
        self.connection_end(&msg.conn_id_on_a)
    }

    fn conn_close_confirm(
        &mut self,
        msg: MsgConnectionCloseConfirm,
    ) -> Result<ConnectionEnd, HandlerError> {
        conn_close_confirm::validate(self, &msg)?;
        conn_close_confirm::execute(self, &msg)?;
        self.connection_end(&msg.conn_id_on_b)
    }

    fn query_connection(&self, conn_id: &ConnectionId) -> Result<ConnectionEnd, HandlerError> {
        self.connection_end(conn_id)
    }

    fn is_connection_available(&self, conn_id: &ConnectionId) -> Result<bool, HandlerError> {
        self.connection_available(conn_id)
    }
}
