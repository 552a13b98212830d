//! Ticket kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price tier of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    /// Base tier.
    Standard,
    /// VIP tier.
    Vip,
    /// Premium tier.
    Premium,
}

impl TicketKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vip => "vip",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for TicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketKind {
    type Err = eventide_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "vip" => Ok(Self::Vip),
            "premium" => Ok(Self::Premium),
            _ => Err(eventide_core::AppError::validation(format!(
                "Invalid ticket kind: '{s}'. Expected one of: standard, vip, premium"
            ))),
        }
    }
}
