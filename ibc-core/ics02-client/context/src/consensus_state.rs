//! Defines the trait to be implemented by all concrete consensus state types

use ibc_handshake_commitment_types::commitment::CommitmentRoot;

/// Defines methods that all `ConsensusState`s should provide.
///
/// One can think of a "consensus state" as a pruned header, to be stored on chain. In other words,
/// a consensus state only contains the header's information needed by the handshake handlers.
pub trait ConsensusState {
    /// Commitment root of the consensus state, which is used for key-value pair verification.
    fn root(&self) -> &CommitmentRoot;
}
