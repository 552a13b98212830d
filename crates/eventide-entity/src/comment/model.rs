//! Comment entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

use super::status::CommentStatus;

/// A user comment on an event. Replies reference their parent comment via
/// `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Commenting user's id hex string.
    pub user_id: String,
    /// Commented event's id hex string.
    pub event_id: String,
    /// Comment body.
    pub content: String,
    /// Parent comment id hex string, `None` for top-level comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Moderation status.
    #[serde(default)]
    pub status: CommentStatus,
    /// Like counter.
    #[serde(default)]
    pub likes: i32,
    /// When the comment was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Comment {
    /// Create a new top-level comment with audit fields initialized.
    pub fn new(
        user_id: impl Into<String>,
        event_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            event_id: event_id.into(),
            content: content.into(),
            parent_id: None,
            status: CommentStatus::Active,
            likes: 0,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }
}

impl_entity!(Comment, "comments");
