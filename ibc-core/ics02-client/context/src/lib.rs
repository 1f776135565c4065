//! This crate functions as an intermediary layer between the storage of host
//! chains and a light client implementation. It provides the traits a light
//! client implements, the traits a host implements to store client state, and
//! the proof verification contract the handshake handlers call into.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

pub mod client_state;
pub mod consensus_state;
pub mod verification;

mod context;
pub use context::*;

/// Trait preludes for the ICS-02 client implementation.
pub mod prelude {
    pub use crate::client_state::*;
    pub use crate::consensus_state::*;
    pub use crate::context::*;
}

pub mod types {
    #[doc(inline)]
    pub use ibc_handshake_client_types::*;
}
