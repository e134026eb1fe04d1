use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::validator::{ValidationRules, VoteValidator};

/// Application configuration, loaded from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    validation_rules: Option<ValidationRules>,
    #[serde(default)]
    prescreen_voters: bool,
}

impl Config {
    /// Load the config from the JSON file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))
    }

    /// Rules for screening voters before registration, if any.
    pub fn validation_rules(&self) -> Option<&ValidationRules> {
        self.validation_rules.as_ref()
    }

    /// Whether voters should be screened by the validator before registration.
    pub fn prescreen_voters(&self) -> bool {
        self.prescreen_voters
    }

    /// The validator to screen voters with, if screening is enabled.
    /// Asking for screening without giving rules is an error.
    pub fn prescreener(&self) -> Result<Option<VoteValidator>> {
        if !self.prescreen_voters {
            return Ok(None);
        }
        VoteValidator::new(self.validation_rules.clone()).map(Some)
    }
}
