use ibc_handshake_client_types::Height;
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::ConnectionId;

/// Sent to chain B after chain A closed its end of the connection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionCloseConfirm {
    pub conn_id_on_b: ConnectionId,
    /// Proof of the `Closed` ConnectionEnd stored on chain A
    pub proof_conn_end_on_a: CommitmentProofBytes,
    pub proof_height_on_a: Height,
}
