//! Query functions for the connection and channel layers.
//!
//! Every value is read from the block it is proven against, never from state
//! the host has not committed yet.

use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::host::types::error::HostError;
use ibc_handshake_core::host::types::path::Path;
use ibc_handshake_core::host::ValidationContext;
use ibc_handshake_core::primitives::prelude::*;
use ibc_handshake_core::primitives::Codec;

use crate::core::context::ProvableContext;
use crate::error::QueryError;
use crate::types::{Proof, ProvedValue, StoreLocation};

pub mod channel;
pub mod connection;
pub mod context;

/// Checks that `location` addresses the store the host commits to, and
/// returns the committed height the query is served at.
pub(crate) fn proof_height<I>(
    ibc_ctx: &I,
    location: &StoreLocation,
    query_height: Option<Height>,
) -> Result<Height, QueryError>
where
    I: ValidationContext,
{
    let expected = ibc_ctx.commitment_prefix();
    let actual = location.commitment_prefix()?;

    if expected != actual {
        return Err(QueryError::UnknownStore { expected, actual });
    }

    let latest_height = ibc_ctx.host_height()?;

    match query_height {
        Some(query_height) if query_height > latest_height => Err(QueryError::UncommittedHeight {
            query_height,
            latest_height,
        }),
        Some(query_height) => Ok(query_height),
        None => Ok(latest_height),
    }
}

/// Returns the proof of `path` at `height` if `prove` is set.
pub(crate) fn maybe_prove<I>(
    ibc_ctx: &I,
    prove: bool,
    height: Height,
    path: Path,
) -> Result<Option<Proof>, QueryError>
where
    I: ProvableContext,
{
    if !prove {
        return Ok(None);
    }

    ibc_ctx
        .get_proof(height, &path)
        .map(Some)
        .ok_or_else(|| QueryError::missing_proof(format!("proof not found for path: {path}")))
}

/// Reads the value committed under `path` at `height`, with its proof if
/// `prove` is set. Returns `None` if nothing is committed there.
pub(crate) fn read_committed<I, T>(
    ibc_ctx: &I,
    prove: bool,
    height: Height,
    path: Path,
) -> Result<Option<ProvedValue<T>>, QueryError>
where
    I: ProvableContext,
    T: Codec,
{
    let Some(bytes) = ibc_ctx.get_value(height, &path) else {
        return Ok(None);
    };
    let value = T::decode_vec(&bytes).map_err(HostError::from)?;

    let proof = maybe_prove(ibc_ctx, prove, height, path)?;

    Ok(Some(ProvedValue::new(value, proof)))
}
