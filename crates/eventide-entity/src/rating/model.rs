//! Rating entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

/// A 1-5 star rating left by a user for an event. One rating per user per
/// event, enforced by a unique compound index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Rating user's id hex string.
    pub user_id: String,
    /// Rated event's id hex string.
    pub event_id: String,
    /// Star value, 1 through 5.
    pub value: i32,
    /// Free-text remark.
    pub comment: String,
    /// When the rating was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the rating was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Rating {
    /// Create a new rating with audit fields initialized.
    pub fn new(
        user_id: impl Into<String>,
        event_id: impl Into<String>,
        value: i32,
        comment: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            event_id: event_id.into(),
            value,
            comment: comment.into(),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }
}

impl_entity!(Rating, "ratings");
