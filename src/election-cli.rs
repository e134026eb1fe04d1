//! A simple CLI tool for running a panchayat election from a JSON dump.
//! Voters are registered and votes cast in the order they appear, then the
//! results, winner and regional vote total are reported.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::BufReader;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{info, warn};
use serde::Deserialize;

use panchayat_election::{
    count_votes_in_regions, create_election,
    model::{
        candidate::Candidate, region::RegionNode, session::Ballot, session::ResultRow,
        voter::Voter,
    },
    Config,
};

const PROGRAM_NAME: &str = "election-cli";

const ABOUT_TEXT: &str = "Run a panchayat election from a JSON dump.

EXIT CODES:
     0: Election ran successfully.
     1: Error.";

const ELECTION_PATH: &str = "ELECTION_PATH";

const ELECTION_PATH_HELP: &str = "The path to a JSON election dump with \
`candidates`, `voters`, `votes` and optionally `regions`";

const CONFIG_PATH: &str = "config";

const CONFIG_PATH_HELP: &str = "The path to a JSON config file with voter validation rules";

const LOG_CONFIG_PATH: &str = "log4rs.yaml";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .arg(
            Arg::new(ELECTION_PATH)
                .help(ELECTION_PATH_HELP)
                .action(ArgAction::Set)
                .required(true),
        )
        .arg(
            Arg::new(CONFIG_PATH)
                .long(CONFIG_PATH)
                .help(CONFIG_PATH_HELP)
                .action(ArgAction::Set),
        )
}

/// Errors that this program may produce.
#[derive(Debug, Eq, PartialEq)]
enum Error {
    /// IO error described by the inner message.
    IO(String),
    /// Failed to decode the JSON dump.
    Format(String),
    /// The config or the election data is unusable.
    Invalid(panchayat_election::Error),
}

impl From<panchayat_election::Error> for Error {
    fn from(err: panchayat_election::Error) -> Self {
        Error::Invalid(err)
    }
}

/// An election as dumped to JSON.
#[derive(Debug, Deserialize)]
struct ElectionDump {
    candidates: Vec<Candidate>,
    #[serde(default)]
    voters: Vec<Voter>,
    #[serde(default)]
    votes: Vec<Ballot>,
    #[serde(default)]
    regions: Option<RegionNode>,
}

/// Everything that happened while running the election.
#[derive(Debug, Eq, PartialEq)]
struct Summary {
    /// Why each refused voter was refused.
    rejected_voters: Vec<String>,
    /// Why each refused vote was refused.
    rejected_votes: Vec<String>,
    results: Vec<ResultRow>,
    winner: Option<ResultRow>,
    /// Total over the region tree, if one was given.
    region_votes: Option<u64>,
}

/// A human-readable results line.
struct FriendlyRow<'a>(&'a ResultRow);

impl Display for FriendlyRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let row = self.0;
        write!(
            f,
            "{} ({}, {}): {} vote{}",
            row.name,
            row.id,
            row.party,
            row.votes,
            if row.votes != 1 { "s" } else { "" }
        )
    }
}

/// Describe a voter for messages, even if the record is incomplete.
fn describe_voter(voter: &Voter) -> String {
    voter
        .id
        .clone()
        .or_else(|| voter.name.clone())
        .unwrap_or_else(|| "<anonymous>".to_string())
}

/// Run the election described by the dump at `path`.
fn run_election(path: &str, config: &Config) -> Result<Summary, Error> {
    // Load the file.
    let file = BufReader::new(File::open(path).map_err(|e| Error::IO(e.to_string()))?);
    let dump: ElectionDump =
        serde_json::from_reader(file).map_err(|e| Error::Format(e.to_string()))?;
    let prescreener = config.prescreener()?;

    let mut election = create_election(dump.candidates);

    // Register voters.
    let mut rejected_voters = Vec::new();
    for voter in dump.voters.iter() {
        if let Some(validator) = &prescreener {
            let report = validator.validate(voter);
            if !report.valid {
                rejected_voters.push(format!("{}: {}", describe_voter(voter), report.reason));
                continue;
            }
        }
        if !election.register_voter(voter) {
            rejected_voters.push(format!(
                "{}: ineligible or already registered",
                describe_voter(voter)
            ));
        }
    }

    // Cast votes.
    let rejected_votes = dump
        .votes
        .iter()
        .filter_map(|vote| {
            election.cast_vote(
                &vote.voter_id,
                &vote.candidate_id,
                |_| None,
                |rejection| Some(rejection.to_string()),
            )
        })
        .collect();

    let region_votes = dump
        .regions
        .as_ref()
        .map(|regions| count_votes_in_regions(Some(regions)))
        .transpose()?;

    Ok(Summary {
        rejected_voters,
        rejected_votes,
        results: election.results(),
        winner: election.winner(),
        region_votes,
    })
}

/// Run the election, report the result, and return the exit code.
fn run(args: &ArgMatches) -> u8 {
    let path: &String = args.get_one(ELECTION_PATH).unwrap(); // Required argument is guaranteed to be present.
    let config = match args.get_one::<String>(CONFIG_PATH) {
        Some(config_path) => match Config::from_path(config_path) {
            Ok(config) => config,
            Err(err) => {
                println!("{}", err);
                return 1;
            }
        },
        None => Config::default(),
    };

    match run_election(path, &config) {
        Ok(summary) => {
            for rejection in summary.rejected_voters.iter() {
                println!("Voter refused: {}", rejection);
            }
            for rejection in summary.rejected_votes.iter() {
                println!("Vote refused: {}", rejection);
            }
            println!("Results:");
            for row in summary.results.iter() {
                println!("  {}", FriendlyRow(row));
            }
            match &summary.winner {
                Some(winner) => println!("Winner: {}", FriendlyRow(winner)),
                None => println!("No votes were cast."),
            }
            if let Some(total) = summary.region_votes {
                println!("Votes across all regions: {}", total);
            }
            info!("Election {path} completed");
            0
        }
        Err(Error::IO(msg)) => {
            println!("IO error: {}", msg);
            1
        }
        Err(Error::Format(msg)) => {
            println!("Invalid JSON: {}", msg);
            1
        }
        Err(Error::Invalid(err)) => {
            warn!("Election {path} could not be run: {err}");
            println!("{}", err);
            1
        }
    }
}

fn main() {
    // Set up logging. The tool still works without it.
    if let Err(err) = log4rs::init_file(LOG_CONFIG_PATH, Default::default()) {
        eprintln!("Logging disabled: {err}");
    }

    let args = cli().get_matches();
    let exit_code = run(&args);
    std::process::exit(exit_code.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, party: &str, votes: u64) -> ResultRow {
        ResultRow {
            id: id.to_string(),
            name: name.to_string(),
            party: party.to_string(),
            votes,
        }
    }

    #[test]
    fn election() {
        // This test actually enters library code, so enable logging.
        log4rs_test_utils::test_logging::init_logging_once_for(
            ["panchayat_election", "election_cli"],
            None,
            None,
        );

        let summary = run_election("example_dumps/election.json", &Config::default()).unwrap();
        assert_eq!(
            summary.rejected_voters,
            vec![
                "V4: ineligible or already registered".to_string(),
                "V1: ineligible or already registered".to_string(),
            ]
        );
        assert_eq!(
            summary.rejected_votes,
            vec![
                "voter V4 is not registered".to_string(),
                "voter V1 has already voted".to_string(),
                "candidate C9 is not standing in this election".to_string(),
            ]
        );
        assert_eq!(
            summary.results,
            vec![
                row("C2", "Pradhan Sita", "Lok", 2),
                row("C1", "Sarpanch Ram", "Janata", 1),
                row("C3", "Mukhiya Gopal", "Kisan", 1),
            ]
        );
        assert_eq!(summary.winner, Some(row("C2", "Pradhan Sita", "Lok", 2)));
        assert_eq!(summary.region_votes, Some(21));
    }

    #[test]
    fn prescreened_election() {
        let config = Config::from_path("example_dumps/config.json").unwrap();
        let summary = run_election("example_dumps/election.json", &config).unwrap();
        assert_eq!(
            summary.rejected_voters,
            vec![
                "V4: voter age is less than 18".to_string(),
                "V5: name is missing".to_string(),
                "V1: ineligible or already registered".to_string(),
            ]
        );
        assert_eq!(summary.results[2], row("C3", "Mukhiya Gopal", "Kisan", 0));
    }

    #[test]
    fn no_votes() {
        let summary =
            run_election("example_dumps/election_no_votes.json", &Config::default()).unwrap();
        assert_eq!(summary.winner, None);
        assert_eq!(summary.region_votes, None);
        assert!(summary.results.iter().all(|row| row.votes == 0));
    }

    #[test]
    fn bad_input() {
        assert!(matches!(
            run_election("example_dumps/election_malformed.json", &Config::default()),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            run_election("not a real file", &Config::default()),
            Err(Error::IO(_))
        ));
        assert_eq!(
            run_election(
                "example_dumps/election_malformed_regions.json",
                &Config::default()
            ),
            Err(Error::Invalid(panchayat_election::Error::MalformedRegion {
                region: "Jaipur".to_string()
            }))
        );
    }

    #[test]
    fn friendly_rows() {
        assert_eq!(
            FriendlyRow(&row("C1", "Sarpanch Ram", "Janata", 1)).to_string(),
            "Sarpanch Ram (C1, Janata): 1 vote"
        );
        assert_eq!(
            FriendlyRow(&row("C2", "Pradhan Sita", "Lok", 0)).to_string(),
            "Pradhan Sita (C2, Lok): 0 votes"
        );
    }

    #[test]
    fn correct_cli_usage() {
        let command_line = [PROGRAM_NAME, "example_dumps/election.json"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 0);

        let command_line = [
            PROGRAM_NAME,
            "example_dumps/election.json",
            "--config",
            "example_dumps/config.json",
        ];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 0);

        let command_line = [
            PROGRAM_NAME,
            "example_dumps/election.json",
            "--config",
            "example_dumps/config_no_rules.json",
        ];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 1);

        let command_line = [PROGRAM_NAME, "example_dumps/election_malformed.json"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 1);

        let command_line = [PROGRAM_NAME, "not a real file"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 1);
    }

    #[test]
    fn bad_cli_usage() {
        // Something very wrong.
        let command_line = [PROGRAM_NAME, "this", "invocation", "is", "incorrect"];
        cli().try_get_matches_from(command_line).unwrap_err();

        // No options at all.
        let command_line = [PROGRAM_NAME];
        cli().try_get_matches_from(command_line).unwrap_err();
    }
}
