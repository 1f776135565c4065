//! ICS-23: commitment types a chain uses to expose its handshake state to a
//! counterparty light client.
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

pub mod commitment;
pub mod error;
pub mod merkle;
