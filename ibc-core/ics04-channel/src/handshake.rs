use ibc_handshake_channel_types::channel::ChannelEnd;
use ibc_handshake_channel_types::msgs::{
    MsgChannelCloseConfirm, MsgChannelCloseInit, MsgChannelOpenAck, MsgChannelOpenConfirm,
    MsgChannelOpenInit, MsgChannelOpenTimeout, MsgChannelOpenTry,
};
use ibc_handshake_handler_types::error::HandlerError;
use ibc_handshake_host::types::identifiers::{ChannelId, PortId, Sequence};
use ibc_handshake_host::types::path::{ChannelEndPath, SeqRecvPath, SeqSendPath};
use ibc_handshake_host::ExecutionContext;

use crate::handler::chan_close_confirm::{chan_close_confirm_execute, chan_close_confirm_validate};
use crate::handler::chan_close_init::{chan_close_init_execute, chan_close_init_validate};
use crate::handler::chan_open_ack::{chan_open_ack_execute, chan_open_ack_validate};
use crate::handler::chan_open_confirm::{chan_open_confirm_execute, chan_open_confirm_validate};
use crate::handler::chan_open_init::{chan_open_init_execute, chan_open_init_validate};
use crate::handler::chan_open_timeout::{chan_open_timeout_execute, chan_open_timeout_validate};
use crate::handler::chan_open_try::{chan_open_try_execute, chan_open_try_validate};
use crate::handler::sequence;

/// The channel handshake and the sequence counters as a set of capabilities
/// of a host chain.
///
/// Implemented for every [`ExecutionContext`].
pub trait ChannelHandshake {
    fn chan_open_init(&mut self, msg: MsgChannelOpenInit) -> Result<ChannelEnd, HandlerError>;

    fn chan_open_try(&mut self, msg: MsgChannelOpenTry) -> Result<ChannelEnd, HandlerError>;

    fn chan_open_ack(&mut self, msg: MsgChannelOpenAck) -> Result<ChannelEnd, HandlerError>;

    fn chan_open_confirm(&mut self, msg: MsgChannelOpenConfirm)
        -> Result<ChannelEnd, HandlerError>;

    fn chan_open_timeout(&mut self, msg: MsgChannelOpenTimeout)
        -> Result<ChannelEnd, HandlerError>;

    fn chan_close_init(&mut self, msg: MsgChannelCloseInit) -> Result<ChannelEnd, HandlerError>;

    fn chan_close_confirm(
        &mut self,
        msg: MsgChannelCloseConfirm,
    ) -> Result<ChannelEnd, HandlerError>;

    /// Returns the record stored under `(port_id, chan_id)`, or a `NotFound` error.
    fn query_channel(&self, port_id: &PortId, chan_id: &ChannelId)
        -> Result<ChannelEnd, HandlerError>;

    /// Returns `true` iff the channel exists and is open.
    fn is_channel_available(&self, port_id: &PortId, chan_id: &ChannelId)
        -> Result<bool, HandlerError>;

    fn next_sequence_send(&self, port_id: &PortId, chan_id: &ChannelId)
        -> Result<Sequence, HandlerError>;

    fn next_sequence_recv(&self, port_id: &PortId, chan_id: &ChannelId)
        -> Result<Sequence, HandlerError>;

    /// See [`sequence::send_next_sequence`].
    fn send_next_sequence(
        &mut self,
        port_id: &PortId,
        chan_id: &ChannelId,
    ) -> Result<Sequence, HandlerError>;

    /// See [`sequence::advance_sequence_recv`].
    fn advance_sequence_recv(
        &mut self,
        port_id: &PortId,
        chan_id: &ChannelId,
        sequence: Sequence,
    ) -> Result<Sequence, HandlerError>;
}

impl<Ctx> ChannelHandshake for Ctx
where
    Ctx: ExecutionContext,
{
    fn chan_open_init(&mut self, msg: MsgChannelOpenInit) -> Result<ChannelEnd, HandlerError> {
        let chan_end_path = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
        chan_open_init_validate(self, msg.clone())?;
        chan_open_init_execute(self, msg)?;
        self.channel_end(&chan_end_path)
    }

    fn chan_open_try(&mut self, msg: MsgChannelOpenTry) -> Result<ChannelEnd, HandlerError> {
        let chan_end_path = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
        chan_open_try_validate(self, msg.clone())?;
        chan_open_try_execute(self, msg)?;
        self.channel_end(&chan_end_path)
    }

    fn chan_open_ack(&mut self, msg: MsgChannelOpenAck) -> Result<ChannelEnd, HandlerError> {
        let chan_end_path = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
        chan_open_ack_validate(self, msg.clone())?;
        chan_open_ack_execute(self, msg)?;
        self.channel_end(&chan_end_path)
    }

    fn chan_open_confirm(
        &mut self,
        msg: MsgChannelOpenConfirm,
    ) -> Result<ChannelEnd, HandlerError> {
        let chan_end_path = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
        chan_open_confirm_validate(self, msg.clone())?;
        chan_open_confirm_execute(self, msg)?;
        self.channel_end(&chan_end_path)
    }

    fn chan_open_timeout(
        &mut self,
        msg: MsgChannelOpenTimeout,
    ) -> Result<ChannelEnd, HandlerError> {
        let chan_end_path = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
        chan_open_timeout_validate(self, msg.clone())?;
        chan_open_timeout_execute(self, msg)?;
        self.channel_end(&chan_end_path)
    }

    fn chan_close_init(&mut self, msg: MsgChannelCloseInit) -> Result<ChannelEnd, HandlerError> {
        let chan_end_path = ChannelEndPath::new(&msg.port_id_on_a, &msg.chan_id_on_a);
        chan_close_init_validate(self, msg.clone())?;
        chan_close_init_execute(self, msg)?;
        self.channel_end(&chan_end_path)
    }

    fn chan_close_confirm(
        &mut self,
        msg: MsgChannelCloseConfirm,
    ) -> Result<ChannelEnd, HandlerError> {
        let chan_end_path = ChannelEndPath::new(&msg.port_id_on_b, &msg.chan_id_on_b);
        chan_close_confirm_validate(self, msg.clone())?;
        chan_close_confirm_execute(self, msg)?;
        self.channel_end(&chan_end_path)
    }

    fn query_channel(
        &self,
        port_id: &PortId,
        chan_id: &ChannelId,
    ) -> Result<ChannelEnd, HandlerError> {
        self.channel_end(&ChannelEndPath::new(port_id, chan_id))
    }

    fn is_channel_available(
        &self,
        port_id: &PortId,
        chan_id: &ChannelId,
    ) -> Result<bool, HandlerError> {
        self.channel_available(&ChannelEndPath::new(port_id, chan_id))
    }

    fn next_sequence_send(
        &self,
        port_id: &PortId,
        chan_id: &ChannelId,
    ) -> Result<Sequence, HandlerError> {
        self.get_next_sequence_send(&SeqSendPath::new(port_id, chan_id))
    }

    fn next_sequence_recv(
        &self,
        port_id: &PortId,
        chan_id: &ChannelId,
    ) -> Result<Sequence, HandlerError> {
        self.get_next_sequence_recv(&SeqRecvPath::new(port_id, chan_id))
    }

    fn send_next_sequence(
        &mut self,
        port_id: &PortId,
        chan_id: &ChannelId,
    ) -> Result<Sequence, HandlerError> {
        sequence::send_next_sequence(self, port_id, chan_id)
    }

    fn advance_sequence_recv(
        &mut self,
        port_id: &PortId,
        chan_id: &ChannelId,
        sequence: Sequence,
    ) -> Result<Sequence, HandlerError> {
        sequence::advance_sequence_recv(self, port_id, chan_id, sequence)
    }
}
