use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::common::{CandidateId, VoterId};

/// A successfully cast vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    pub voter_id: VoterId,
    pub candidate_id: CandidateId,
}

/// Reasons a vote can be refused. Gates are checked in declaration order,
/// so only the first failing one is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteRejection {
    #[error("voter {voter_id} is not registered")]
    NotRegistered { voter_id: VoterId },
    #[error("candidate {candidate_id} is not standing in this election")]
    UnknownCandidate { candidate_id: CandidateId },
    #[error("voter {voter_id} has already voted")]
    AlreadyVoted { voter_id: VoterId },
}
