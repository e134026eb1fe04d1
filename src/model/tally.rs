use std::collections::HashMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::model::common::CandidateId;

/// A snapshot of vote counts per candidate.
///
/// Tallies are values: updating one with [`tally_pure`] produces a new
/// tally and leaves the original untouched, so there is no `DerefMut`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    counts: HashMap<CandidateId, u64>,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// The count for the given candidate, zero if absent.
    pub fn count(&self, candidate_id: &str) -> u64 {
        self.counts.get(candidate_id).copied().unwrap_or(0)
    }
}

impl Deref for Tally {
    type Target = HashMap<CandidateId, u64>;

    fn deref(&self) -> &Self::Target {
        &self.counts
    }
}

impl From<HashMap<CandidateId, u64>> for Tally {
    fn from(counts: HashMap<CandidateId, u64>) -> Self {
        Self { counts }
    }
}

impl<const N: usize> From<[(&str, u64); N]> for Tally {
    fn from(counts: [(&str, u64); N]) -> Self {
        counts
            .into_iter()
            .map(|(id, count)| (id.to_string(), count))
            .collect::<HashMap<_, _>>()
            .into()
    }
}

/// Return a new tally with one more vote for `candidate_id`.
/// Candidates not yet in the tally start from zero.
pub fn tally_pure(current_tally: &Tally, candidate_id: &str) -> Tally {
    let mut counts = current_tally.counts.clone();
    *counts.entry(candidate_id.to_string()).or_insert(0) += 1;
    Tally { counts }
}
