//! Message definitions for the connection handshake datagrams.
//!
//! The four opening messages follow the ICS-03 handshake: `OpenInit` and
//! `OpenAck` are sent to the initiating chain A, `OpenTry` and `OpenConfirm`
//! to the responding chain B. Every message after `OpenInit` carries a proof
//! of the counterparty's connection record together with the height it was
//! taken at, and the deadline the counterparty recorded for this step.
//!
//! `OpenTimeout`, `CloseInit` and `CloseConfirm` abandon or tear down a
//! connection.

mod conn_close_confirm;
mod conn_close_init;
mod conn_open_ack;
mod conn_open_confirm;
mod conn_open_init;
mod conn_open_timeout;
mod conn_open_try;

pub use conn_close_confirm::*;
pub use conn_close_init::*;
pub use conn_open_ack::*;
pub use conn_open_confirm::*;
pub use conn_open_init::*;
pub use conn_open_timeout::*;
pub use conn_open_try::*;

/// Enumeration of all possible messages that the connection handshake processes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum ConnectionMsg {
    OpenInit(MsgConnectionOpenInit),
    OpenTry(MsgConnectionOpenTry),
    OpenAck(MsgConnectionOpenAck),
    OpenConfirm(MsgConnectionOpenConfirm),
    OpenTimeout(MsgConnectionOpenTimeout),
    CloseInit(MsgConnectionCloseInit),
    CloseConfirm(MsgConnectionCloseConfirm),
}
