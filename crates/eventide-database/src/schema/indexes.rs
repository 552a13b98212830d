//! Index definitions for every collection.
//!
//! Uniqueness constraints cover the natural keys (email, username,
//! barcode, category name, one rating per user per event); the remaining
//! indexes back the common filter combinations, plus a geospatial index
//! for venue proximity queries.

use bson::doc;
use mongodb::IndexModel;
use mongodb::options::IndexOptions;

use eventide_core::Entity;
use eventide_entity::{Category, Comment, Event, Performer, Rating, Ticket, User, Venue};

fn ascending(field: &str) -> IndexModel {
    IndexModel::builder().keys(doc! { field: 1 }).build()
}

fn unique(field: &str) -> IndexModel {
    IndexModel::builder()
        .keys(doc! { field: 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

/// All index models, grouped by collection.
pub(crate) fn index_models() -> Vec<(&'static str, Vec<IndexModel>)> {
    vec![
        (
            User::COLLECTION,
            vec![unique("email"), unique("username"), ascending("role")],
        ),
        (
            Event::COLLECTION,
            vec![
                ascending("category_id"),
                ascending("venue_id"),
                ascending("start_date"),
                ascending("status"),
                ascending("organizer_id"),
                // Common query pattern: events of a category ordered by date.
                IndexModel::builder()
                    .keys(doc! { "category_id": 1, "start_date": 1 })
                    .build(),
            ],
        ),
        (
            Ticket::COLLECTION,
            vec![
                ascending("event_id"),
                ascending("user_id"),
                ascending("status"),
                IndexModel::builder()
                    .keys(doc! { "user_id": 1, "event_id": 1 })
                    .build(),
                unique("barcode"),
            ],
        ),
        (
            Category::COLLECTION,
            vec![unique("name"), ascending("parent_id")],
        ),
        (
            Venue::COLLECTION,
            vec![
                ascending("name"),
                ascending("city"),
                ascending("country"),
                IndexModel::builder()
                    .keys(doc! { "location": "2dsphere" })
                    .build(),
            ],
        ),
        (
            Performer::COLLECTION,
            vec![ascending("name"), ascending("kind")],
        ),
        (
            Comment::COLLECTION,
            vec![
                ascending("event_id"),
                ascending("user_id"),
                ascending("parent_id"),
                ascending("status"),
            ],
        ),
        (
            Rating::COLLECTION,
            vec![
                ascending("event_id"),
                ascending("user_id"),
                // One rating per user per event.
                IndexModel::builder()
                    .keys(doc! { "user_id": 1, "event_id": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_collection_has_indexes() {
        let grouped = index_models();
        assert_eq!(grouped.len(), 8);
        for (collection, models) in &grouped {
            assert!(!models.is_empty(), "no indexes for {collection}");
        }
    }

    #[test]
    fn test_natural_keys_are_unique() {
        let grouped = index_models();
        let unique_fields: Vec<(&str, String)> = grouped
            .iter()
            .flat_map(|(collection, models)| {
                models
                    .iter()
                    .filter(|m| {
                        m.options
                            .as_ref()
                            .and_then(|o| o.unique)
                            .unwrap_or(false)
                    })
                    .map(|m| (*collection, m.keys.to_string()))
            })
            .collect();
        assert!(
            unique_fields
                .iter()
                .any(|(c, k)| *c == "users" && k.contains("email"))
        );
        assert!(
            unique_fields
                .iter()
                .any(|(c, k)| *c == "tickets" && k.contains("barcode"))
        );
        assert!(
            unique_fields
                .iter()
                .any(|(c, k)| *c == "ratings" && k.contains("user_id"))
        );
    }
}
