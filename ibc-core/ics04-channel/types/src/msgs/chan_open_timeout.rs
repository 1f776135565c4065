use ibc_handshake_client_types::Height;
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::{ChannelId, PortId};

/// Closes a channel stuck in `Init` once chain B passed the recorded deadline
/// without storing its end. Sent to chain A.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgChannelOpenTimeout {
    pub port_id_on_a: PortId,
    pub chan_id_on_a: ChannelId,
    pub proof_unreceived_on_b: CommitmentProofBytes,
    pub proof_height_on_b: Height,
}
