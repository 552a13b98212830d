//! Ticket status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Valid for entry.
    Active,
    /// Scanned at the door.
    Used,
    /// Canceled before use.
    Canceled,
    /// Canceled and refunded.
    Refunded,
}

impl TicketStatus {
    /// Whether the ticket still grants entry.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Used => "used",
            Self::Canceled => "canceled",
            Self::Refunded => "refunded",
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = eventide_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "used" => Ok(Self::Used),
            "canceled" => Ok(Self::Canceled),
            "refunded" => Ok(Self::Refunded),
            _ => Err(eventide_core::AppError::validation(format!(
                "Invalid ticket status: '{s}'. Expected one of: active, used, canceled, refunded"
            ))),
        }
    }
}
