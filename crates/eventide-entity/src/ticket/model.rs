//! Ticket entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use eventide_core::impl_entity;
use serde::{Deserialize, Serialize};

use super::kind::TicketKind;
use super::status::TicketStatus;

/// A purchased admission ticket for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Event id hex string.
    pub event_id: String,
    /// Purchasing user's id hex string.
    pub user_id: String,
    /// Price tier.
    pub kind: TicketKind,
    /// Price paid.
    pub price: f64,
    /// When the ticket was purchased.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub purchase_date: DateTime<Utc>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: TicketStatus,
    /// Assigned seat.
    pub seat_number: String,
    /// Unique entry barcode.
    pub barcode: String,
    /// When the ticket was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// When the ticket was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Ticket {
    /// Create a new active ticket with audit fields initialized.
    pub fn new(
        event_id: impl Into<String>,
        user_id: impl Into<String>,
        kind: TicketKind,
        price: f64,
        seat_number: impl Into<String>,
        barcode: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            event_id: event_id.into(),
            user_id: user_id.into(),
            kind,
            price,
            purchase_date: now,
            status: TicketStatus::Active,
            seat_number: seat_number.into(),
            barcode: barcode.into(),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }
}

impl_entity!(Ticket, "tickets");
