use ibc_handshake_client_types::Height;
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::ConnectionId;

/// Sent to chain A once chain B has passed the deadline recorded on a
/// connection still in `Init` without having stored the connection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionOpenTimeout {
    pub conn_id_on_a: ConnectionId,
    /// Proof that chain B holds no connection under the counterparty identifier
    pub proof_unreceived_on_b: CommitmentProofBytes,
    /// Height of chain B at which the absence was proven
    pub proof_height_on_b: Height,
}
