//! Repository integration tests.
//!
//! These need a reachable MongoDB instance. Set `EVENTIDE_TEST_MONGODB_URL`
//! (for example `mongodb://localhost:27017`) to run them; without it every
//! test is a silent no-op so the suite stays green on machines without a
//! store. Each test works in its own throwaway database.

use std::time::Duration;

use bson::Document;
use bson::doc;
use mongodb::{Client, Database};

use eventide_core::Entity;
use eventide_core::error::ErrorKind;
use eventide_core::traits::repository::Repository;
use eventide_core::types::filter::Filter;
use eventide_core::types::pagination::PageRequest;
use eventide_core::types::sorting::SortField;
use eventide_database::{MongoRepository, SchemaInitializer};
use eventide_entity::{Category, User};

async fn test_database() -> Option<Database> {
    let url = std::env::var("EVENTIDE_TEST_MONGODB_URL").ok()?;
    let client = Client::with_uri_str(&url).await.ok()?;
    let name = format!("eventide_test_{}", bson::oid::ObjectId::new().to_hex());
    Some(client.database(&name))
}

fn category(name: &str) -> Category {
    Category::new(name, format!("{name} events"), "tag")
}

#[tokio::test]
async fn test_create_assigns_id_and_round_trips() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<Category> = MongoRepository::new(&db);

    let created = repo.create(category("Music")).await.unwrap();
    let id = created.id.expect("store-assigned id");

    let fetched = repo.find_by_id(id).await.unwrap().expect("created entity");
    assert_eq!(fetched.name, "Music");
    assert_eq!(fetched.description, "Music events");
    assert_eq!(fetched.icon, "tag");
    assert_eq!(fetched.id, Some(id));
    assert!(!fetched.is_deleted);

    db.drop().await.ok();
}

#[tokio::test]
async fn test_soft_delete_invariant() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<Category> = MongoRepository::new(&db);

    let created = repo.create(category("Theater")).await.unwrap();
    let id = created.id.unwrap();

    assert!(repo.soft_delete(id).await.unwrap());

    // Every default read must exclude the record now.
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.exists(id).await.unwrap());
    let matches = repo.find(&Filter::new().eq("name", "Theater")).await.unwrap();
    assert!(matches.is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);

    // ...even though the document still physically exists.
    let raw = db
        .collection::<Document>(Category::COLLECTION)
        .count_documents(doc! { "_id": id })
        .await
        .unwrap();
    assert_eq!(raw, 1);

    // Soft-deleting again modifies nothing.
    assert!(!repo.soft_delete(id).await.unwrap());

    db.drop().await.ok();
}

#[tokio::test]
async fn test_hard_delete_removes_physically() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<Category> = MongoRepository::new(&db);

    let created = repo.create(category("Dance")).await.unwrap();
    let id = created.id.unwrap();
    assert!(repo.soft_delete(id).await.unwrap());

    // Hard delete ignores the soft-delete flag.
    assert!(repo.delete(id).await.unwrap());
    let raw = db
        .collection::<Document>(Category::COLLECTION)
        .count_documents(doc! { "_id": id })
        .await
        .unwrap();
    assert_eq!(raw, 0);

    db.drop().await.ok();
}

#[tokio::test]
async fn test_update_refreshes_timestamp_and_respects_soft_delete() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<Category> = MongoRepository::new(&db);

    let mut created = repo.create(category("Film")).await.unwrap();
    let id = created.id.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    created.description = "Film festivals and screenings".to_string();
    assert!(repo.update(created.clone()).await.unwrap());

    let fetched = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.description, "Film festivals and screenings");
    assert!(fetched.updated_at > fetched.created_at);

    // A soft-deleted record is not updatable.
    assert!(repo.soft_delete(id).await.unwrap());
    assert!(!repo.update(created).await.unwrap());

    db.drop().await.ok();
}

#[tokio::test]
async fn test_pagination_covers_collection_without_duplicates() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<Category> = MongoRepository::new(&db);

    for i in 0..7 {
        repo.create(category(&format!("Genre {i}"))).await.unwrap();
    }

    let page_size = 3;
    let first = repo.list_page(&PageRequest::new(1, page_size)).await.unwrap();
    assert_eq!(first.total_items, 7);
    assert_eq!(first.total_pages, 3);
    assert!(first.has_next);
    assert!(!first.has_previous);

    let mut seen = Vec::new();
    for page in 1..=first.total_pages {
        let response = repo
            .list_page(&PageRequest::new(page as i64, page_size))
            .await
            .unwrap();
        seen.extend(response.items.into_iter().map(|c| c.id.unwrap()));
    }
    assert_eq!(seen.len(), 7);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 7, "no id may appear on two pages");

    db.drop().await.ok();
}

#[tokio::test]
async fn test_blank_sort_field_falls_back_to_default() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<Category> = MongoRepository::new(&db);

    for i in 0..5 {
        repo.create(category(&format!("Genre {i}"))).await.unwrap();
    }

    let default_order = repo.list_page(&PageRequest::new(1, 10)).await.unwrap();
    let blank_asc = repo
        .list_page_sorted(&PageRequest::new(1, 10), &SortField::asc(""))
        .await
        .unwrap();

    let mut default_ids: Vec<_> = default_order.items.iter().map(|c| c.id).collect();
    let blank_ids: Vec<_> = blank_asc.items.iter().map(|c| c.id).collect();
    // Default is created_at descending; the blank-field ascending sort
    // must be its exact reverse.
    default_ids.reverse();
    assert_eq!(default_ids, blank_ids);

    db.drop().await.ok();
}

#[tokio::test]
async fn test_filter_fields_accept_api_casing() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<User> = MongoRepository::new(&db);

    let mut user = User::new("ana", "ana@example.com", "hash", "Ana Pop");
    user.profile_picture = "https://example.com/ana.jpg".to_string();
    repo.create(user).await.unwrap();

    // camelCase caller field name resolves to the stored snake_case field.
    let matches = repo
        .find(&Filter::new().starts_with("fullName", "Ana"))
        .await
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].username, "ana");

    db.drop().await.ok();
}

#[tokio::test]
async fn test_unique_index_conflict_surfaces_on_create() {
    let Some(db) = test_database().await else {
        return;
    };
    SchemaInitializer::new(db.clone()).run().await.unwrap();
    let repo: MongoRepository<User> = MongoRepository::new(&db);

    repo.create(User::new("ana", "ana@example.com", "hash", "Ana Pop"))
        .await
        .unwrap();
    let err = repo
        .create(User::new("bob", "ana@example.com", "hash", "Bob Ionescu"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    db.drop().await.ok();
}

#[tokio::test]
async fn test_schema_initializer_is_idempotent() {
    let Some(db) = test_database().await else {
        return;
    };
    let initializer = SchemaInitializer::new(db.clone());
    initializer.run().await.unwrap();
    initializer.run().await.unwrap();

    let names = db.list_collection_names().await.unwrap();
    for collection in eventide_database::schema::COLLECTIONS {
        assert!(names.iter().any(|n| n == collection), "missing {collection}");
    }

    db.drop().await.ok();
}

#[tokio::test]
async fn test_invalid_sort_direction_normalization_of_page_input() {
    let Some(db) = test_database().await else {
        return;
    };
    let repo: MongoRepository<Category> = MongoRepository::new(&db);
    repo.create(category("Opera")).await.unwrap();

    // Nonsense page input is normalized, not rejected.
    let response = repo.list_page(&PageRequest::new(0, -5)).await.unwrap();
    assert_eq!(response.page, 1);
    assert_eq!(response.page_size, 10);
    assert_eq!(response.items.len(), 1);

    db.drop().await.ok();
}
