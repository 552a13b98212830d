//! Performer kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of act a performer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformerKind {
    /// A solo artist.
    Individual,
    /// A band.
    Band,
    /// A group (dance troupe, theater company, ...).
    Group,
    /// An orchestra.
    Orchestra,
}

impl PerformerKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Band => "band",
            Self::Group => "group",
            Self::Orchestra => "orchestra",
        }
    }
}

impl fmt::Display for PerformerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PerformerKind {
    type Err = eventide_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "band" => Ok(Self::Band),
            "group" => Ok(Self::Group),
            "orchestra" => Ok(Self::Orchestra),
            _ => Err(eventide_core::AppError::validation(format!(
                "Invalid performer kind: '{s}'. Expected one of: individual, band, group, orchestra"
            ))),
        }
    }
}
