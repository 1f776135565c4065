use ibc_handshake_client_types::{Height, TimeoutHeight};
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::{ClientId, ConnectionId};

use crate::connection::Counterparty;

/// Per our convention, this message is sent to chain B.
/// The handler will check proofs of chain A.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionOpenTry {
    /// Identifier under which chain B stores the connection
    pub conn_id_on_b: ConnectionId,
    /// ClientId on B that the connection is being opened for
    pub client_id_on_b: ClientId,
    /// ClientId, ConnectionId and prefix of chain A
    pub counterparty: Counterparty,
    /// proof of ConnectionEnd stored on Chain A during ConnOpenInit
    pub proof_conn_end_on_a: CommitmentProofBytes,
    /// Height at which the proof in this message was taken
    pub proof_height_on_a: Height,
    /// Deadline chain A recorded for this step
    pub timeout_height_on_a: TimeoutHeight,
    /// Height of chain A past which chain A must not process `OpenAck`
    pub next_timeout_height: TimeoutHeight,
}
