//! Core domain models for the homework bot
//!
//! These models represent a homework record as reported by the Practicum API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Review status of a homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Status code as used by the API
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single submitted homework and its review state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    #[serde(rename = "homework_name")]
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Notification text announcing the current status
    pub fn status_message(&self) -> String {
        format!(
            "Changed status of review for \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

impl TryFrom<&Value> for Homework {
    type Error = ValidationError;

    /// Name is checked before status, and both before the verdict lookup.
    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        let name = match record.get("homework_name") {
            None | Some(Value::Null) => return Err(ValidationError::MissingKey("homework_name")),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        };

        let status: HomeworkStatus = match record.get("status") {
            None | Some(Value::Null) => return Err(ValidationError::MissingKey("status")),
            Some(Value::String(code)) => code.parse()?,
            Some(other) => return Err(ValidationError::UnknownStatus(other.to_string())),
        };

        Ok(Self { name, status })
    }
}
