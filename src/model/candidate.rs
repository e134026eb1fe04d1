use serde::{Deserialize, Serialize};

use crate::model::common::CandidateId;

/// A candidate standing in an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate unique ID.
    pub id: CandidateId,
    /// Display name.
    pub name: String,
    /// Party the candidate stands for.
    pub party: String,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(
        id: impl Into<CandidateId>,
        name: impl Into<String>,
        party: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party: party.into(),
        }
    }
}

/// Example data for tests.
#[cfg(test)]
pub(crate) mod examples {
    use super::*;

    impl Candidate {
        pub fn example1() -> Self {
            Self::new("C1", "Sarpanch Ram", "Janata")
        }

        pub fn example2() -> Self {
            Self::new("C2", "Pradhan Sita", "Lok")
        }

        pub fn example3() -> Self {
            Self::new("C3", "Mukhiya Gopal", "Kisan")
        }
    }
}
