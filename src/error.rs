use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors caused by misusing the library, as opposed to ordinary validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Malformed region {region}: sub-regions are missing")]
    MalformedRegion { region: String },
    #[error("Vote count overflowed while summing regions")]
    VoteOverflow,
}
