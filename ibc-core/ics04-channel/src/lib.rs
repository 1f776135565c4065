//! ICS-04: Channel and sequencing semantics. Processes the channel handshake
//! atop an open connection and maintains the send and receive sequence
//! counters of every open channel.
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

pub use handshake::ChannelHandshake;

/// Re-exports ICS-04 data structures from the `ibc-handshake-channel-types` crate
pub mod types {
    #[doc(inline)]
    pub use ibc_handshake_channel_types::*;
}
