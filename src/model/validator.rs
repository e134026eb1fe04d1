use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{common::Age, voter::Voter};

/// Declarative rules a voter record must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum voting age.
    pub min_age: Age,
    /// Fields that must be present, checked in order.
    pub required_fields: Vec<String>,
}

/// The outcome of validating one voter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub reason: String,
}

impl ValidationReport {
    fn invalid(reason: String) -> Self {
        Self {
            valid: false,
            reason,
        }
    }
}

/// A reusable voter validator built from a set of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteValidator {
    rules: ValidationRules,
}

impl VoteValidator {
    /// Build a validator. Validating without rules is meaningless, so `None` is rejected.
    pub fn new(rules: Option<ValidationRules>) -> Result<Self> {
        rules
            .map(|rules| Self { rules })
            .ok_or_else(|| Error::InvalidConfig("voter validation rules are missing".to_string()))
    }

    /// The rules this validator enforces.
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate a voter. Only the first problem found is reported.
    pub fn validate(&self, voter: &Voter) -> ValidationReport {
        if let Some(field) = self
            .rules
            .required_fields
            .iter()
            .find(|field| !voter.has_field(field))
        {
            return ValidationReport::invalid(format!("{field} is missing"));
        }

        // An age that was not required and is absent cannot be compared, so it passes.
        match voter.age {
            Some(age) if age < self.rules.min_age => ValidationReport::invalid(format!(
                "voter age is less than {}",
                self.rules.min_age
            )),
            Some(age) => ValidationReport {
                valid: true,
                reason: format!("All required fields are present and voter's age is {age}"),
            },
            None => ValidationReport {
                valid: true,
                reason: "All required fields are present and voter's age is unknown".to_string(),
            },
        }
    }
}

/// Build a validation function from the given rules.
pub fn create_vote_validator(
    rules: Option<ValidationRules>,
) -> Result<impl Fn(&Voter) -> ValidationReport> {
    let validator = VoteValidator::new(rules)?;
    Ok(move |voter: &Voter| validator.validate(voter))
}
