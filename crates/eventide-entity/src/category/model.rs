//! Category entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

/// An event category. Categories form a hierarchy via `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique category name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Icon identifier for the UI.
    pub icon: String,
    /// Parent category id hex string, `None` for root categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// When the category was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Category {
    /// Create a new root category with audit fields initialized.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            parent_id: None,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }
}

impl_entity!(Category, "categories");
