use ibc_handshake_client_types::{Height, TimeoutHeight};
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::ConnectionId;

/// Per our convention, this message is sent to chain A.
/// The handler will check proofs of chain B.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionOpenAck {
    /// ConnectionId that chain A has chosen for its ConnectionEnd
    pub conn_id_on_a: ConnectionId,
    /// proof of ConnectionEnd stored on Chain B during ConnOpenTry
    pub proof_conn_end_on_b: CommitmentProofBytes,
    /// Height at which the proof in this message was taken
    pub proof_height_on_b: Height,
    /// Deadline chain B recorded for this step
    pub timeout_height_on_b: TimeoutHeight,
    /// Height of chain B past which chain B must not process `OpenConfirm`
    pub next_timeout_height: TimeoutHeight,
}
