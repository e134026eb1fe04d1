//! Identifier types shared across the model.

/// Our candidate IDs are strings, e.g. "C1".
pub type CandidateId = String;
/// Our voter IDs are strings, e.g. "V1".
pub type VoterId = String;
/// Voter ages are whole years.
pub type Age = u32;
