//! Contains a set of utility traits and implementations for querying the
//! handshake state of a chain: connection and channel records, their
//! availability and the sequence counters of open channels.
//!
//! Every query is addressed by a [`StoreLocation`](crate::types::StoreLocation)
//! and may ask for commitment proofs of the returned values, taken at the
//! latest committed height of the host unless another height is requested.
//!
//! The provided functions are implemented for any host implementing the
//! following _context_ traits:
//! - [`ValidationContext`](ibc_handshake_core::host::ValidationContext)
//! - [`ProvableContext`](crate::core::context::ProvableContext)
//! - [`QueryContext`](crate::core::context::QueryContext), for the listing queries
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod error;
pub mod types;
