pub mod candidate;
pub mod common;
pub mod region;
pub mod session;
pub mod tally;
pub mod validator;
pub mod voter;
