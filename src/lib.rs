//! In-process election sessions for village panchayat elections, along with
//! standalone helpers for voter validation, regional vote counts, and tallies.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{
    region::count_votes_in_regions,
    session::{create_election, Election, SharedElection},
    tally::tally_pure,
    validator::create_vote_validator,
};
