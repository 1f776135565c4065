//! Types for the events emitted by the connection handshake handlers.

use ibc_handshake_host_types::identifiers::{ClientId, ConnectionId};
use ibc_handshake_primitives::prelude::*;

/// Connection event types
pub const CONNECTION_OPEN_INIT_EVENT: &str = "connection_open_init";
pub const CONNECTION_OPEN_TRY_EVENT: &str = "connection_open_try";
pub const CONNECTION_OPEN_ACK_EVENT: &str = "connection_open_ack";
pub const CONNECTION_OPEN_CONFIRM_EVENT: &str = "connection_open_confirm";
pub const CONNECTION_OPEN_TIMEOUT_EVENT: &str = "connection_open_timeout";
pub const CONNECTION_CLOSE_INIT_EVENT: &str = "connection_close_init";
pub const CONNECTION_CLOSE_CONFIRM_EVENT: &str = "connection_close_confirm";

/// The content of the `key` field for the attribute containing the connection identifier.
pub const CONN_ID_ATTRIBUTE_KEY: &str = "connection_id";
pub const CLIENT_ID_ATTRIBUTE_KEY: &str = "client_id";
pub const COUNTERPARTY_CONN_ID_ATTRIBUTE_KEY: &str = "counterparty_connection_id";
pub const COUNTERPARTY_CLIENT_ID_ATTRIBUTE_KEY: &str = "counterparty_client_id";

/// Attributes shared by every connection event.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct Attributes {
    connection_id: ConnectionId,
    client_id: ClientId,
    counterparty_connection_id: ConnectionId,
    counterparty_client_id: ClientId,
}

impl Attributes {
    /// Returns the attributes as `(key, value)` pairs, in emission order.
    fn key_values(&self) -> Vec<(&'static str, String)> {
        vec![
            (CONN_ID_ATTRIBUTE_KEY, self.connection_id.to_string()),
            (CLIENT_ID_ATTRIBUTE_KEY, self.client_id.to_string()),
            (
                COUNTERPARTY_CONN_ID_ATTRIBUTE_KEY,
                self.counterparty_connection_id.to_string(),
            ),
            (
                COUNTERPARTY_CLIENT_ID_ATTRIBUTE_KEY,
                self.counterparty_client_id.to_string(),
            ),
        ]
    }
}

macro_rules! connection_event {
    ($(#[$doc:meta])* $name:ident, $event_type:expr) => {
        $(#[$doc])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name(Attributes);

        impl $name {
            pub fn new(
                conn_id: ConnectionId,
                client_id: ClientId,
                counterparty_conn_id: ConnectionId,
                counterparty_client_id: ClientId,
            ) -> Self {
                Self(Attributes {
                    connection_id: conn_id,
                    client_id,
                    counterparty_connection_id: counterparty_conn_id,
                    counterparty_client_id,
                })
            }

            pub fn conn_id(&self) -> &ConnectionId {
                &self.0.connection_id
            }

            pub fn client_id(&self) -> &ClientId {
                &self.0.client_id
            }

            pub fn counterparty_conn_id(&self) -> &ConnectionId {
                &self.0.counterparty_connection_id
            }

            pub fn counterparty_client_id(&self) -> &ClientId {
                &self.0.counterparty_client_id
            }

            pub fn event_type(&self) -> &str {
                $event_type
            }

            pub fn attributes(&self) -> Vec<(&'static str, String)> {
                self.0.key_values()
            }
        }
    };
}

connection_event!(
    /// Emitted when the initiator records a connection in `Init`.
    OpenInit,
    CONNECTION_OPEN_INIT_EVENT
);
connection_event!(
    /// Emitted when the responder records a connection in `TryOpen`.
    OpenTry,
    CONNECTION_OPEN_TRY_EVENT
);
connection_event!(OpenAck, CONNECTION_OPEN_ACK_EVENT);
connection_event!(OpenConfirm, CONNECTION_OPEN_CONFIRM_EVENT);
connection_event!(
    /// Emitted when a stalled `Init` connection is closed after the counterparty missed its deadline.
    OpenTimeout,
    CONNECTION_OPEN_TIMEOUT_EVENT
);
connection_event!(CloseInit, CONNECTION_CLOSE_INIT_EVENT);
connection_event!(CloseConfirm, CONNECTION_CLOSE_CONFIRM_EVENT);
