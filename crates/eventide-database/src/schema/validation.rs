//! `$jsonSchema` validator definitions for every collection.
//!
//! Required fields, enumerated value sets, numeric ranges and string
//! length bounds. Validators run at `moderate` level so documents that
//! predate a rule change do not block unrelated updates.

use bson::{Document, doc};

use eventide_core::Entity;
use eventide_entity::{Category, Comment, Event, Performer, Rating, Ticket, User, Venue};

/// All validator schemas, keyed by collection.
pub(crate) fn validators() -> Vec<(&'static str, Document)> {
    vec![
        (User::COLLECTION, user_schema()),
        (Event::COLLECTION, event_schema()),
        (Ticket::COLLECTION, ticket_schema()),
        (Category::COLLECTION, category_schema()),
        (Venue::COLLECTION, venue_schema()),
        (Performer::COLLECTION, performer_schema()),
        (Comment::COLLECTION, comment_schema()),
        (Rating::COLLECTION, rating_schema()),
    ]
}

fn audit_properties() -> Document {
    doc! {
        "created_at": { "bsonType": "date" },
        "updated_at": { "bsonType": "date" },
        "is_deleted": { "bsonType": "bool" },
    }
}

fn user_schema() -> Document {
    let mut properties = doc! {
        "username": { "bsonType": "string", "minLength": 3, "maxLength": 50 },
        "email": { "bsonType": "string", "pattern": "^[^@\\s]+@[^@\\s]+\\.[^@\\s]+$" },
        "role": { "bsonType": "string", "enum": ["user", "organizer", "admin"] },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["username", "email", "password_hash", "role", "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

fn event_schema() -> Document {
    let mut properties = doc! {
        "title": { "bsonType": "string", "minLength": 3, "maxLength": 100 },
        "status": { "bsonType": "string", "enum": ["announced", "ongoing", "completed", "canceled"] },
        "capacity": { "bsonType": "int", "minimum": 1 },
        "tickets_sold": { "bsonType": "int", "minimum": 0 },
        "rating_count": { "bsonType": "int", "minimum": 0 },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["title", "description", "organizer_id", "category_id", "venue_id",
                     "start_date", "end_date", "status", "capacity",
                     "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

fn ticket_schema() -> Document {
    let mut properties = doc! {
        "kind": { "bsonType": "string", "enum": ["standard", "vip", "premium"] },
        "status": { "bsonType": "string", "enum": ["active", "used", "canceled", "refunded"] },
        "price": { "bsonType": "double", "minimum": 0 },
        "barcode": { "bsonType": "string", "minLength": 1 },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["event_id", "user_id", "kind", "price", "status", "seat_number", "barcode",
                     "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

fn category_schema() -> Document {
    let mut properties = doc! {
        "name": { "bsonType": "string", "minLength": 2, "maxLength": 50 },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["name", "description", "icon", "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

fn venue_schema() -> Document {
    let mut properties = doc! {
        "capacity": { "bsonType": "int", "minimum": 1 },
        "location": {
            "bsonType": "object",
            "required": ["latitude", "longitude"],
            "properties": {
                "latitude": { "bsonType": "double", "minimum": -90, "maximum": 90 },
                "longitude": { "bsonType": "double", "minimum": -180, "maximum": 180 },
            },
        },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["name", "address", "city", "country", "capacity", "location",
                     "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

fn performer_schema() -> Document {
    let mut properties = doc! {
        "name": { "bsonType": "string", "minLength": 1, "maxLength": 100 },
        "kind": { "bsonType": "string", "enum": ["individual", "band", "group", "orchestra"] },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["name", "kind", "description", "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

fn comment_schema() -> Document {
    let mut properties = doc! {
        "content": { "bsonType": "string", "minLength": 1, "maxLength": 1000 },
        "status": { "bsonType": "string", "enum": ["active", "hidden", "removed"] },
        "likes": { "bsonType": "int", "minimum": 0 },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["user_id", "event_id", "content", "status",
                     "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

fn rating_schema() -> Document {
    let mut properties = doc! {
        "value": { "bsonType": "int", "minimum": 1, "maximum": 5 },
    };
    properties.extend(audit_properties());
    doc! {
        "bsonType": "object",
        "required": ["user_id", "event_id", "value", "created_at", "updated_at", "is_deleted"],
        "properties": properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_collection_has_a_validator() {
        let schemas = validators();
        assert_eq!(schemas.len(), 8);
        for (collection, schema) in &schemas {
            let required = schema
                .get_array("required")
                .unwrap_or_else(|_| panic!("no required fields for {collection}"));
            assert!(!required.is_empty());
            // Audit fields are mandatory everywhere.
            for field in ["created_at", "updated_at", "is_deleted"] {
                assert!(
                    required.iter().any(|f| f.as_str() == Some(field)),
                    "{collection} must require {field}"
                );
            }
        }
    }

    #[test]
    fn test_rating_value_bounds() {
        let schema = rating_schema();
        let value = schema
            .get_document("properties")
            .unwrap()
            .get_document("value")
            .unwrap();
        assert_eq!(value.get_i32("minimum").unwrap(), 1);
        assert_eq!(value.get_i32("maximum").unwrap(), 5);
    }
}
