//! Event entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

use super::status::EventStatus;

/// A cultural event: concert, exhibition, festival, performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Organizing user's id hex string.
    pub organizer_id: String,
    /// Category id hex string.
    pub category_id: String,
    /// Venue id hex string.
    pub venue_id: String,
    /// When the event starts.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub start_date: DateTime<Utc>,
    /// When the event ends.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub end_date: DateTime<Utc>,
    /// Promotional image URLs.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: EventStatus,
    /// Maximum attendance.
    pub capacity: i32,
    /// Number of tickets sold so far.
    #[serde(default)]
    pub tickets_sold: i32,
    /// Running average of rating values.
    #[serde(default)]
    pub average_rating: f64,
    /// Number of ratings received.
    #[serde(default)]
    pub rating_count: i32,
    /// Performer id hex strings.
    #[serde(default)]
    pub performer_ids: Vec<String>,
    /// Per-performer billing details.
    #[serde(default)]
    pub performer_details: Vec<PerformerDetail>,
    /// When the event was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Billing entry for one performer on an event's lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformerDetail {
    /// Performer id hex string.
    pub performer_id: String,
    /// Position in the running order, 1-based.
    pub order: i32,
    /// Billing role.
    pub role: PerformerRole,
    /// Stage time in minutes.
    pub duration_minutes: i32,
}

/// Billing role of a performer on the lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformerRole {
    /// Main act.
    Headliner,
    /// Opening act.
    Opening,
    /// Guest appearance.
    Guest,
}

impl Event {
    /// Create a new event with audit fields initialized.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        organizer_id: impl Into<String>,
        category_id: impl Into<String>,
        venue_id: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            organizer_id: organizer_id.into(),
            category_id: category_id.into(),
            venue_id: venue_id.into(),
            start_date,
            end_date,
            image_urls: Vec::new(),
            status: EventStatus::Announced,
            capacity,
            tickets_sold: 0,
            average_rating: 0.0,
            rating_count: 0,
            performer_ids: Vec::new(),
            performer_details: Vec::new(),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }

    /// Remaining ticket capacity.
    pub fn remaining_capacity(&self) -> i32 {
        (self.capacity - self.tickets_sold).max(0)
    }
}

impl_entity!(Event, "events");
