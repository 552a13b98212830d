//! Event status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Published but not yet started.
    Announced,
    /// Currently running.
    Ongoing,
    /// Finished normally.
    Completed,
    /// Called off by the organizer.
    Canceled,
}

impl EventStatus {
    /// Whether tickets can still be sold in this status.
    pub fn is_sellable(&self) -> bool {
        matches!(self, Self::Announced | Self::Ongoing)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Announced => "announced",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Announced
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = eventide_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "announced" => Ok(Self::Announced),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            _ => Err(eventide_core::AppError::validation(format!(
                "Invalid event status: '{s}'. Expected one of: announced, ongoing, completed, canceled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sellable_states() {
        assert!(EventStatus::Announced.is_sellable());
        assert!(EventStatus::Ongoing.is_sellable());
        assert!(!EventStatus::Completed.is_sellable());
        assert!(!EventStatus::Canceled.is_sellable());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ongoing".parse::<EventStatus>().unwrap(), EventStatus::Ongoing);
        assert!("postponed".parse::<EventStatus>().is_err());
    }
}
