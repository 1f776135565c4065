//! ICS-03: Connection Semantics implementation to process the connection
//! handshake. Exports data structures and implementations of the connection
//! module.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

pub mod handler;
mod handshake;

pub use handshake::ConnectionHandshake;

/// Re-exports ICS-03 data structures from the `ibc-handshake-connection-types` crate
pub mod types {
    #[doc(inline)]
    pub use ibc_handshake_connection_types::*;
}
