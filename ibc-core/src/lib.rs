//! Re-exports data structures and implementations of the handshake core components.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

/// Re-exports handler entrypoints from the `ibc-handshake-handler` crate for
/// added convenience.
pub mod entrypoint {
    #[doc(inline)]
    pub use ibc_handshake_handler::entrypoint::*;
}

/// Re-exports primitive types from the `ibc-handshake-primitives` crate
pub mod primitives {
    #[doc(inline)]
    pub use ibc_handshake_primitives::*;
}

/// Re-exports ICS-02 implementation from the `ibc-handshake-client` crate
pub mod client {
    #[doc(inline)]
    pub use ibc_handshake_client::*;
}

/// Re-exports ICS-03 implementation from the `ibc-handshake-connection` crate
pub mod connection {
    #[doc(inline)]
    pub use ibc_handshake_connection::*;
}

/// Re-exports ICS-04 implementation from the `ibc-handshake-channel` crate
pub mod channel {
    #[doc(inline)]
    pub use ibc_handshake_channel::*;
}

/// Re-exports ICS-23 data structures from the `ibc-handshake-commitment-types` crate
pub mod commitment_types {
    #[doc(inline)]
    pub use ibc_handshake_commitment_types::*;
}

/// Re-exports ICS-24 implementation from the `ibc-handshake-host` crate
pub mod host {
    #[doc(inline)]
    pub use ibc_handshake_host::*;
}

/// Re-exports ICS-25 implementation from the `ibc-handshake-handler` crate
pub mod handler {
    #[doc(inline)]
    pub use ibc_handshake_handler::*;
}
