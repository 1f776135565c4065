//! The proof verification contract.
//!
//! Every handshake step that depends on a counterparty fact establishes it by
//! exactly one call to [`verify_commitment`], checked against the consensus
//! root the local light client holds for the counterparty at the proof height.

use ibc_handshake_client_types::error::ClientError;
use ibc_handshake_client_types::Height;
use ibc_handshake_commitment_types::commitment::{CommitmentPrefix, CommitmentProofBytes};
use ibc_handshake_host_types::identifiers::ClientId;
use ibc_handshake_host_types::path::{ClientConsensusStatePath, Path};
use ibc_handshake_primitives::prelude::*;
use tracing::trace;

use crate::client_state::ClientStateCommon;
use crate::consensus_state::ConsensusState;
use crate::context::ClientValidationContext;

/// What a proof must establish about the key it is checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpectedValue {
    /// The key is committed with exactly these bytes.
    Present(Vec<u8>),
    /// Nothing is committed under the key.
    Absent,
}

/// Checks `proof` against the root held by client `client_id` at
/// `proof_height`, for the key `prefix` + `path`.
///
/// Never mutates state. Every failure is reported as a distinct
/// [`ClientError`]: an unknown client, a proof height the client has not
/// reached, a missing consensus state, a malformed proof and a well-formed
/// proof of a different fact are all distinguishable.
pub fn verify_commitment<V>(
    ctx: &V,
    client_id: &ClientId,
    proof_height: Height,
    prefix: &CommitmentPrefix,
    path: Path,
    expected: ExpectedValue,
    proof: &CommitmentProofBytes,
) -> Result<(), ClientError>
where
    V: ClientValidationContext,
{
    let client_state = ctx.client_state(client_id)?;

    client_state.validate_proof_height(proof_height)?;

    let consensus_state = ctx.consensus_state(&ClientConsensusStatePath::new(
        client_id.clone(),
        proof_height.revision_number(),
        proof_height.revision_height(),
    ))?;

    trace!(%client_id, %proof_height, %prefix, %path, "verifying counterparty commitment");

    match expected {
        ExpectedValue::Present(value) => client_state.verify_membership(
            prefix,
            proof,
            consensus_state.root(),
            path,
            value,
        ),
        ExpectedValue::Absent => {
            client_state.verify_non_membership(prefix, proof, consensus_state.root(), path)
        }
    }
}
