//! # eventide-entity
//!
//! Domain entity models for the Eventide events platform. Every entity
//! satisfies the base-entity contract from `eventide-core` (store-assigned
//! id, audit timestamps, soft-delete flag) and names the collection its
//! instances persist into.

pub mod category;
pub mod comment;
pub mod event;
pub mod performer;
pub mod rating;
pub mod ticket;
pub mod user;
pub mod venue;

pub use category::Category;
pub use comment::{Comment, CommentStatus};
pub use event::{Event, EventStatus, PerformerDetail, PerformerRole};
pub use performer::{Performer, PerformerKind};
pub use rating::Rating;
pub use ticket::{Ticket, TicketKind, TicketStatus};
pub use user::{User, UserRole};
pub use venue::{GeoPoint, Venue};

#[cfg(test)]
mod tests {
    use eventide_core::Entity;
    use eventide_core::entity::collection_name;

    use super::*;

    /// Every entity's collection constant must match the documented naming
    /// convention, and no two entities may share a collection.
    #[test]
    fn test_collection_names_match_convention() {
        let expected = [
            ("Category", Category::COLLECTION, "categories"),
            ("Comment", Comment::COLLECTION, "comments"),
            ("Event", Event::COLLECTION, "events"),
            ("Performer", Performer::COLLECTION, "performers"),
            ("Rating", Rating::COLLECTION, "ratings"),
            ("Ticket", Ticket::COLLECTION, "tickets"),
            ("User", User::COLLECTION, "users"),
            ("Venue", Venue::COLLECTION, "venues"),
        ];
        for (type_name, actual, literal) in expected {
            assert_eq!(actual, literal, "collection constant for {type_name}");
            assert_eq!(
                collection_name(type_name),
                literal,
                "derived name for {type_name}"
            );
        }

        let mut names: Vec<&str> = expected.iter().map(|(_, actual, _)| *actual).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), expected.len(), "collection names must be unique");
    }
}
