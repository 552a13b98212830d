//! Venue entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

/// A physical location where events take place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Venue name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Maximum attendance.
    pub capacity: i32,
    /// Geographic coordinates, indexed for proximity queries.
    pub location: GeoPoint,
    /// Photo URL.
    pub image_url: String,
    /// Long-form description.
    pub description: String,
    /// Amenity names (parking, wheelchair access, ...).
    #[serde(default)]
    pub facilities: Vec<String>,
    /// When the venue was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the venue was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Geographic coordinates of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Venue {
    /// Create a new venue with audit fields initialized.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        capacity: i32,
        location: GeoPoint,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            city: city.into(),
            country: country.into(),
            capacity,
            location,
            image_url: String::new(),
            description: String::new(),
            facilities: Vec::new(),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }
}

impl_entity!(Venue, "venues");
