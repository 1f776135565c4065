//! ICS-24: the interface a host chain implements so that the handshake
//! handlers can read and write its store.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

mod context;
pub use context::*;

/// Re-exports ICS-24 data structures from the `ibc-handshake-host-types` crate
pub mod types {
    #[doc(inline)]
    pub use ibc_handshake_host_types::*;
}
