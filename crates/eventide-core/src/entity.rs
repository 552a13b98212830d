//! Base-entity contract shared by all persisted domain records.
//!
//! Every document stored by Eventide carries four audit fields: a
//! store-assigned `_id`, `created_at`/`updated_at` timestamps, and the
//! `is_deleted` soft-delete flag. The [`Entity`] trait exposes those
//! fields to the generic repository without reflection; concrete types
//! declare the fields with their canonical names and implement the trait
//! via [`impl_entity!`].

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Contract satisfied by every persisted domain record.
///
/// Implementations must serialize the audit fields as `_id`, `created_at`,
/// `updated_at` and `is_deleted`; all other stored fields use snake_case.
/// The audit fields are declared inline on each struct rather than through
/// `#[serde(flatten)]`, which would route `ObjectId` and datetime values
/// through serde's content buffer and lose their native BSON encoding.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// The store-side collection all instances of this type persist into.
    ///
    /// Must equal [`collection_name`] applied to the lowercase type name;
    /// a static test table in `eventide-entity` asserts this for every
    /// domain entity.
    const COLLECTION: &'static str;

    /// The store-assigned identifier, `None` before insertion.
    fn id(&self) -> Option<ObjectId>;

    /// Replace the identifier. The repository clears it before insert and
    /// assigns the store-generated value afterwards.
    fn set_id(&mut self, id: Option<ObjectId>);

    /// When the record was created.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the record was last mutated.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Whether the record is logically removed.
    fn is_deleted(&self) -> bool;

    /// Set both audit timestamps, used once at creation.
    fn stamp_created(&mut self, at: DateTime<Utc>);

    /// Refresh `updated_at`, used on every successful mutation.
    fn stamp_updated(&mut self, at: DateTime<Utc>);

    /// Set the soft-delete flag.
    fn set_deleted(&mut self, deleted: bool);
}

/// Implement [`Entity`] for a struct that declares the four audit fields
/// (`id`, `created_at`, `updated_at`, `is_deleted`) with their canonical
/// names and types.
#[macro_export]
macro_rules! impl_entity {
    ($ty:ty, $collection:literal) => {
        impl $crate::entity::Entity for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> Option<::bson::oid::ObjectId> {
                self.id
            }

            fn set_id(&mut self, id: Option<::bson::oid::ObjectId>) {
                self.id = id;
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.updated_at
            }

            fn is_deleted(&self) -> bool {
                self.is_deleted
            }

            fn stamp_created(&mut self, at: ::chrono::DateTime<::chrono::Utc>) {
                self.created_at = at;
                self.updated_at = at;
            }

            fn stamp_updated(&mut self, at: ::chrono::DateTime<::chrono::Utc>) {
                self.updated_at = at;
            }

            fn set_deleted(&mut self, deleted: bool) {
                self.is_deleted = deleted;
            }
        }
    };
}

/// Derive the collection name for an entity type name.
///
/// One deterministic convention, applied uniformly: the lowercase type name,
/// pluralized. A trailing `y` becomes `ies`; `s`, `x`, `ch` or `sh` append
/// `es`; everything else appends `s`.
pub fn collection_name(type_name: &str) -> String {
    let name = type_name.to_lowercase();
    if let Some(stem) = name.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if name.ends_with('s') || name.ends_with('x') || name.ends_with("ch") || name.ends_with("sh") {
        return format!("{name}es");
    }
    format!("{name}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_y_becomes_ies() {
        assert_eq!(collection_name("Category"), "categories");
    }

    #[test]
    fn test_plural_sibilant_appends_es() {
        assert_eq!(collection_name("Status"), "statuses");
        assert_eq!(collection_name("Box"), "boxes");
        assert_eq!(collection_name("Match"), "matches");
        assert_eq!(collection_name("Wish"), "wishes");
    }

    #[test]
    fn test_plural_default_appends_s() {
        assert_eq!(collection_name("User"), "users");
        assert_eq!(collection_name("Event"), "events");
        assert_eq!(collection_name("Venue"), "venues");
    }
}
