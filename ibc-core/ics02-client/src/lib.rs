//! ICS-02: handlers for registering and updating the light clients that
//! back every proven handshake step, along with re-exporting the client
//! traits and data structures.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

pub mod handler;

/// Re-exports ICS-02 traits from `ibc-handshake-client-context` for custom
/// client implementations.
pub mod context {
    #[doc(inline)]
    pub use ibc_handshake_client_context::*;
}

/// Re-exports ICS-02 data structures from the `ibc-handshake-client-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_handshake_client_types::*;
}
