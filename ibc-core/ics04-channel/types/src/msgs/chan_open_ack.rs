use ibc_handshake_client_types::{Height, TimeoutHeight};
use ibc_handshake_commitment_types::commitment::CommitmentProofBytes;
use ibc_handshake_host_types::identifiers::{ChannelId, PortId};

///
/// Message definition for the third step in the channel open handshake (`ChanOpenAck` datagram).
/// Per our convention, this message is sent to chain A.
///
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgChannelOpenAck {
    pub port_id_on_a: PortId,
    pub chan_id_on_a: ChannelId,
    pub proof_chan_end_on_b: CommitmentProofBytes,
    pub proof_height_on_b: Height,
    pub timeout_height_on_b: TimeoutHeight,
    pub next_timeout_height: TimeoutHeight,
}
