use ibc_handshake_client_types::{Height, TimeoutHeight};
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::ConnectionId;

/// Per our convention, this message is sent to chain B.
/// The handler will check proofs of chain A.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionOpenConfirm {
    /// Token used to identify the connection on chain B
    pub conn_id_on_b: ConnectionId,
    /// Proof of ConnectionEnd stored on Chain A during ConnOpenAck
    pub proof_conn_end_on_a: CommitmentProofBytes,
    /// Height at which the proof in this message was taken
    pub proof_height_on_a: Height,
    /// Deadline chain A recorded for this step
    pub timeout_height_on_a: TimeoutHeight,
}
