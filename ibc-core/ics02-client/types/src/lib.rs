//! ICS-02: data structures of the light client registry: heights, timeouts,
//! client messages, events and errors.
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

pub mod error;
pub mod events;
mod height;
pub mod msgs;
mod timeout;

pub use height::*;
pub use timeout::*;
