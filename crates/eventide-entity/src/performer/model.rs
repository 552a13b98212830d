//! Performer entity model.

use std::collections::HashMap;

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

use super::kind::PerformerKind;

/// An act that appears on event lineups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Performer name.
    pub name: String,
    /// Kind of act.
    pub kind: PerformerKind,
    /// Long-form description.
    pub description: String,
    /// Photo URL.
    pub image_url: String,
    /// Booking contact email.
    pub contact_email: String,
    /// Official website URL.
    pub website: String,
    /// Social media links keyed by platform name.
    #[serde(default)]
    pub social_media: HashMap<String, String>,
    /// When the performer was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the performer was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Performer {
    /// Create a new performer with audit fields initialized.
    pub fn new(
        name: impl Into<String>,
        kind: PerformerKind,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            kind,
            description: description.into(),
            image_url: String::new(),
            contact_email: String::new(),
            website: String::new(),
            social_media: HashMap::new(),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }
}

impl_entity!(Performer, "performers");
