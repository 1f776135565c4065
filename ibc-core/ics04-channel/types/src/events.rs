//! Types for the events emitted by the channel handshake handlers.

use ibc_handshake_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_handshake_primitives::prelude::*;

/// Channel event types
pub const CHANNEL_OPEN_INIT_EVENT: &str = "channel_open_init";
pub const CHANNEL_OPEN_TRY_EVENT: &str = "channel_open_try";
pub const CHANNEL_OPEN_ACK_EVENT: &str = "channel_open_ack";
pub const CHANNEL_OPEN_CONFIRM_EVENT: &str = "channel_open_confirm";
pub const CHANNEL_OPEN_TIMEOUT_EVENT: &str = "channel_open_timeout";
pub const CHANNEL_CLOSE_INIT_EVENT: &str = "channel_close_init";
pub const CHANNEL_CLOSE_CONFIRM_EVENT: &str = "channel_close_confirm";

pub const PORT_ID_ATTRIBUTE_KEY: &str = "port_id";
pub const CHANNEL_ID_ATTRIBUTE_KEY: &str = "channel_id";
pub const COUNTERPARTY_PORT_ID_ATTRIBUTE_KEY: &str = "counterparty_port_id";
pub const COUNTERPARTY_CHANNEL_ID_ATTRIBUTE_KEY: &str = "counterparty_channel_id";
pub const CONNECTION_ID_ATTRIBUTE_KEY: &str = "connection_id";

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct Attributes {
    port_id: PortId,
    channel_id: ChannelId,
    counterparty_port_id: PortId,
    counterparty_channel_id: ChannelId,
    connection_id: ConnectionId,
}

macro_rules! channel_event {
    ($(#[$doc:meta])* $name:ident, $event_type:expr) => {
        $(#[$doc])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name(Attributes);

        impl $name {
            pub fn new(
                port_id: PortId,
                chan_id: ChannelId,
                counterparty_port_id: PortId,
                counterparty_chan_id: ChannelId,
                conn_id: ConnectionId,
            ) -> Self {
                Self(Attributes {
                    port_id,
                    channel_id: chan_id,
                    counterparty_port_id,
                    counterparty_channel_id: counterparty_chan_id,
                    connection_id: conn_id,
                })
            }

            pub fn port_id(&self) -> &PortId {
                &self.0.port_id
            }

            pub fn chan_id(&self) -> &ChannelId {
                &self.0.channel_id
            }

            pub fn counterparty_port_id(&self) -> &PortId {
                &self.0.counterparty_port_id
            }

            pub fn counterparty_chan_id(&self) -> &ChannelId {
                &self.0.counterparty_channel_id
            }

            pub fn conn_id(&self) -> &ConnectionId {
                &self.0.connection_id
            }

            pub fn event_type(&self) -> &str {
                $event_type
            }

            pub fn attributes(&self) -> Vec<(&'static str, String)> {
                vec![
                    (PORT_ID_ATTRIBUTE_KEY, self.0.port_id.to_string()),
                    (CHANNEL_ID_ATTRIBUTE_KEY, self.0.channel_id.to_string()),
                    (
                        COUNTERPARTY_PORT_ID_ATTRIBUTE_KEY,
                        self.0.counterparty_port_id.to_string(),
                    ),
                    (
                        COUNTERPARTY_CHANNEL_ID_ATTRIBUTE_KEY,
                        self.0.counterparty_channel_id.to_string(),
                    ),
                    (CONNECTION_ID_ATTRIBUTE_KEY, self.0.connection_id.to_string()),
                ]
            }
        }
    };
}

channel_event!(OpenInit, CHANNEL_OPEN_INIT_EVENT);
channel_event!(OpenTry, CHANNEL_OPEN_TRY_EVENT);
channel_event!(
    /// Emitted when the initiator opens its channel end; sequence counters start at 1.
    OpenAck,
    CHANNEL_OPEN_ACK_EVENT
);
channel_event!(
    /// Emitted when the responder opens its channel end; sequence counters start at 1.
    OpenConfirm,
    CHANNEL_OPEN_CONFIRM_EVENT
);
channel_event!(OpenTimeout, CHANNEL_OPEN_TIMEOUT_EVENT);
channel_event!(CloseInit, CHANNEL_CLOSE_INIT_EVENT);
channel_event!(CloseConfirm, CHANNEL_CLOSE_CONFIRM_EVENT);
