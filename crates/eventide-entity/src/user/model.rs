//! User entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// A registered user of the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Bcrypt password hash. Serialization is persistence here, so the
    /// hash is stored; redacting it from transport DTOs is the REST
    /// layer's job.
    pub password_hash: String,
    /// Human-readable full name.
    pub full_name: String,
    /// Profile picture URL.
    pub profile_picture: String,
    /// Platform role.
    #[serde(default)]
    pub role: UserRole,
    /// Events the user bookmarked, as id hex strings.
    #[serde(default)]
    pub saved_event_ids: Vec<String>,
    /// Events the user attended, as id hex strings.
    #[serde(default)]
    pub attended_event_ids: Vec<String>,
    /// When the user was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl User {
    /// Create a new user with audit fields initialized.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            full_name: full_name.into(),
            profile_picture: String::new(),
            role: UserRole::User,
            saved_event_ids: Vec::new(),
            attended_event_ids: Vec::new(),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }
}

impl_entity!(User, "users");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_document_uses_store_field_names() {
        let user = User::new("ana", "ana@example.com", "hash", "Ana Pop");
        let doc = bson::to_document(&user).unwrap();

        // No _id until the store assigns one.
        assert!(doc.get("_id").is_none());
        assert_eq!(doc.get_str("full_name").unwrap(), "Ana Pop");
        assert_eq!(doc.get_str("role").unwrap(), "user");
        // Audit timestamps land as native BSON dates.
        assert!(doc.get_datetime("created_at").is_ok());
        assert!(doc.get_datetime("updated_at").is_ok());
        assert!(!doc.get_bool("is_deleted").unwrap());
    }

    #[test]
    fn test_round_trip_preserves_assigned_id() {
        let mut user = User::new("bob", "bob@example.com", "hash", "Bob Ionescu");
        user.id = Some(ObjectId::new());
        let doc = bson::to_document(&user).unwrap();
        assert!(doc.get_object_id("_id").is_ok());

        let back: User = bson::from_document(doc).unwrap();
        assert_eq!(back.id, user.id);
        assert_eq!(back.email, "bob@example.com");
    }
}
