use serde::{Deserialize, Serialize};

use crate::model::common::{Age, VoterId};

/// A voter record, as supplied by the caller.
///
/// Every field may be absent so that incomplete records coming from outside
/// (e.g. a JSON dump) can be represented and then rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Voter unique ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VoterId>,
    /// Voter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Voter age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}

impl Voter {
    /// Create a complete voter record.
    pub fn new(id: impl Into<VoterId>, name: impl Into<String>, age: Age) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            age: Some(age),
        }
    }

    /// Does the record carry no fields at all?
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.age.is_none()
    }

    /// Is the named field present on this record?
    /// Names that are not voter fields are never present.
    pub fn has_field(&self, field: &str) -> bool {
        match field {
            "id" => self.id.is_some(),
            "name" => self.name.is_some(),
            "age" => self.age.is_some(),
            _ => false,
        }
    }

    /// Is the voter old enough? An unknown age never is.
    pub fn is_at_least(&self, min_age: Age) -> bool {
        self.age.map_or(false, |age| age >= min_age)
    }
}

/// Example data for tests.
#[cfg(test)]
pub(crate) mod examples {
    use super::*;

    impl Voter {
        pub fn example1() -> Self {
            Self::new("V1", "Mohan", 25)
        }

        pub fn example2() -> Self {
            Self::new("V2", "Geeta", 41)
        }

        pub fn example3() -> Self {
            Self::new("V3", "Ravi", 18)
        }

        pub fn underage_example() -> Self {
            Self::new("V4", "Chotu", 16)
        }
    }
}
