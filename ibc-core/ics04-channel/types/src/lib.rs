//! ICS-04: data structures of the channel handshake and of the sequence
//! counters maintained for every open channel.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

#[cfg(feature = "std")]
extern crate std;

pub mod channel;
pub mod error;
pub mod events;
pub mod msgs;
