use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use crate::logging::SessionId;
use crate::model::{
    candidate::Candidate,
    common::{Age, CandidateId, VoterId},
    voter::Voter,
};

use super::{Ballot, ResultRow, VoteRejection};

/// Minimum age to register as a voter.
pub const VOTING_AGE: Age = 18;

/// A single election: a fixed list of candidates, the voters registered so far,
/// and the votes they have cast.
#[derive(Debug)]
pub struct Election {
    /// Log identifier.
    id: SessionId,
    /// Candidates, in the order they were listed. Fixed for the session's lifetime.
    candidates: Vec<Candidate>,
    /// IDs of registered voters.
    registered: HashSet<VoterId>,
    /// Maps each voter who has voted to their chosen candidate.
    votes: HashMap<VoterId, CandidateId>,
}

impl Election {
    /// Open a new election with no voters and no votes.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let id = SessionId::next();
        info!("{id}: opened with {} candidates", candidates.len());
        Self {
            id,
            candidates,
            registered: HashSet::new(),
            votes: HashMap::new(),
        }
    }

    /// The candidates standing in this election, in their original order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Register a voter. Returns false, changing nothing, if the record is empty,
    /// has no ID, is underage (or has no age), or the ID is already registered.
    ///
    /// Unlike a bare "at least one field, adult, fresh ID" check, an adult record
    /// without an ID is refused: there is no ID to remember it by, so it could
    /// never vote or be recognised as a duplicate.
    pub fn register_voter(&mut self, voter: &Voter) -> bool {
        if voter.is_empty() || !voter.is_at_least(VOTING_AGE) {
            debug!("{}: refused registration of ineligible voter", self.id);
            return false;
        }
        let voter_id = match &voter.id {
            Some(voter_id) => voter_id,
            None => {
                debug!("{}: refused registration of voter without ID", self.id);
                return false;
            }
        };
        let inserted = self.registered.insert(voter_id.clone());
        if inserted {
            debug!("{}: registered voter {voter_id}", self.id);
        } else {
            debug!("{}: voter {voter_id} is already registered", self.id);
        }
        inserted
    }

    /// Attempt to cast a vote. All gates are checked before anything is recorded.
    pub fn try_cast_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
    ) -> Result<Ballot, VoteRejection> {
        if !self.registered.contains(voter_id) {
            return Err(self.reject(VoteRejection::NotRegistered {
                voter_id: voter_id.to_string(),
            }));
        }
        if !self.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(self.reject(VoteRejection::UnknownCandidate {
                candidate_id: candidate_id.to_string(),
            }));
        }
        if self.votes.contains_key(voter_id) {
            return Err(self.reject(VoteRejection::AlreadyVoted {
                voter_id: voter_id.to_string(),
            }));
        }

        self.votes.insert(voter_id.to_string(), candidate_id.to_string());
        debug!("{}: voter {voter_id} voted for {candidate_id}", self.id);
        Ok(Ballot {
            voter_id: voter_id.to_string(),
            candidate_id: candidate_id.to_string(),
        })
    }

    /// Cast a vote, continuing with `on_success` or `on_error` and returning
    /// whatever that callback returns. Exactly one of them is called.
    /// The vote is recorded before `on_success` runs.
    pub fn cast_vote<T>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: impl FnOnce(Ballot) -> T,
        on_error: impl FnOnce(VoteRejection) -> T,
    ) -> T {
        match self.try_cast_vote(voter_id, candidate_id) {
            Ok(ballot) => on_success(ballot),
            Err(rejection) => on_error(rejection),
        }
    }

    /// Results ordered by votes, most first. Tied candidates keep their listed order.
    pub fn results(&self) -> Vec<ResultRow> {
        self.results_by(ResultRow::by_votes_descending)
    }

    /// Results ordered by the given comparator. The sort is stable, starting
    /// from the candidates' listed order.
    pub fn results_by<F>(&self, compare: F) -> Vec<ResultRow>
    where
        F: FnMut(&ResultRow, &ResultRow) -> Ordering,
    {
        let mut rows: Vec<_> = self
            .candidates
            .iter()
            .map(|candidate| {
                let votes = self.votes.values().filter(|id| **id == candidate.id).count();
                ResultRow::new(candidate, votes as u64)
            })
            .collect();
        rows.sort_by(compare);
        rows
    }

    /// The candidate with the most votes, the earliest listed among ties.
    /// `None` until at least one vote has been cast.
    pub fn winner(&self) -> Option<ResultRow> {
        if self.votes.is_empty() {
            return None;
        }
        self.results().into_iter().next()
    }

    /// Log a rejection and hand it back.
    fn reject(&self, rejection: VoteRejection) -> VoteRejection {
        warn!("{}: vote rejected: {rejection}", self.id);
        rejection
    }
}

/// Open a new election for the given candidates.
pub fn create_election(candidates: Vec<Candidate>) -> Election {
    Election::new(candidates)
}
