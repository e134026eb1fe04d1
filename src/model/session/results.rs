use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{candidate::Candidate, common::CandidateId};

/// One candidate's line in the election results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

impl ResultRow {
    /// Create a row for the given candidate.
    pub fn new(candidate: &Candidate, votes: u64) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            votes,
        }
    }

    /// Default ordering: most votes first. Only looks at votes, so a stable
    /// sort keeps tied candidates in their original order.
    pub fn by_votes_descending(a: &ResultRow, b: &ResultRow) -> Ordering {
        b.votes.cmp(&a.votes)
    }
}
