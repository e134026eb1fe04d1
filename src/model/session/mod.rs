//! Election sessions: registration, voting, and results for one election.

mod ballot;
mod election;
mod results;
mod shared;

pub use ballot::{Ballot, VoteRejection};
pub use election::{create_election, Election, VOTING_AGE};
pub use results::ResultRow;
pub use shared::SharedElection;
