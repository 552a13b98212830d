//! Comment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moderation status of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Visible to everyone.
    Active,
    /// Hidden by a moderator.
    Hidden,
    /// Removed by the author or a moderator.
    Removed,
}

impl CommentStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Hidden => "hidden",
            Self::Removed => "removed",
        }
    }
}

impl Default for CommentStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommentStatus {
    type Err = eventide_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "hidden" => Ok(Self::Hidden),
            "removed" => Ok(Self::Removed),
            _ => Err(eventide_core::AppError::validation(format!(
                "Invalid comment status: '{s}'. Expected one of: active, hidden, removed"
            ))),
        }
    }
}
