//! A light client for mock chains whose consensus states are just the root
//! hashes of a [`MerkleStore`](crate::testapp::store::MerkleStore).
//!
//! Headers are trusted as they come: verification only checks that a header
//! moves the client forward. Proofs, on the other hand, are checked for real
//! against the stored roots.

pub mod client_state;
pub mod consensus_state;
pub mod header;
