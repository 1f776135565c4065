//! Provides utility functions for querying connection states.

use ibc_handshake_core::connection::types::error::ConnectionError;
use ibc_handshake_core::connection::types::ConnectionEnd;
use ibc_handshake_core::host::types::path::{ConnectionPath, Path};
use ibc_handshake_core::host::ValidationContext;

use super::{
    QueryConnectionRequest, QueryConnectionResponse, QueryConnectionsRequest,
    QueryConnectionsResponse,
};
use crate::core::context::{ProvableContext, QueryContext};
use crate::core::{proof_height, read_committed};
use crate::error::QueryError;
use crate::types::ProvedValue;

/// Queries for the connection end of a given connection id, with its proof
/// if one was requested.
pub fn query_connection<I>(
    ibc_ctx: &I,
    request: &QueryConnectionRequest,
) -> Result<QueryConnectionResponse, QueryError>
where
    I: ValidationContext + ProvableContext,
{
    let proof_height = proof_height(ibc_ctx, &request.location, request.query_height)?;

    let connection: ProvedValue<ConnectionEnd> = read_committed(
        ibc_ctx,
        request.prove,
        proof_height,
        Path::Connection(ConnectionPath::new(&request.connection_id)),
    )?
    .ok_or_else(|| ConnectionError::ConnectionNotFound {
        connection_id: request.connection_id.clone(),
    })?;

    Ok(QueryConnectionResponse::new(connection, proof_height))
}

/// Queries for all the existing connection ends.
pub fn query_connections<I>(
    ibc_ctx: &I,
    request: &QueryConnectionsRequest,
) -> Result<QueryConnectionsResponse, QueryError>
where
    I: QueryContext,
{
    let query_height = proof_height(ibc_ctx, &request.location, None)?;

    let connections = ibc_ctx.connection_ends(query_height)?;

    Ok(QueryConnectionsResponse::new(connections, query_height))
}
