use ibc_handshake_client_types::{Height, TimeoutHeight};
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::{ChannelId, PortId};

///
/// Message definition for the fourth step in the channel open handshake (`ChanOpenConfirm`
/// datagram).
/// Per our convention, this message is sent to chain B.
///
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgChannelOpenConfirm {
    pub port_id_on_b: PortId,
    pub chan_id_on_b: ChannelId,
    pub proof_chan_end_on_a: CommitmentProofBytes,
    pub proof_height_on_a: Height,
    pub timeout_height_on_a: TimeoutHeight,
}
