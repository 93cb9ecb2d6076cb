//! Party role enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the interview a party sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Candidate,
    Interviewer,
}

impl PartyRole {
    /// Returns the canonical string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyRole::Candidate => "candidate",
            PartyRole::Interviewer => "interviewer",
        }
    }
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartyRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate" => Ok(PartyRole::Candidate),
            "interviewer" => Ok(PartyRole::Interviewer),
            other => Err(format!("Unknown party role: {}", other)),
        }
    }
}
