//! Exposes handler entry points for the integrated handshake core. These entry
//! points are responsible for processing incoming messages, performing
//! validation and execution logic by invoking the appropriate handler.
//!
//! When processing a given message `M`, if any method in this library returns
//! an error, the runtime is expected to rollback all state modifications made
//! to the context (e.g. [`ExecutionContext`](ibc_handshake_host::ExecutionContext))
//! while processing `M`. The handlers themselves validate every precondition
//! before their first write, so a failed [`entrypoint::dispatch`] leaves the
//! context untouched.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

pub mod entrypoint;

/// Re-export handler types from `ibc-handshake-handler-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_handshake_handler_types::*;
}
