//! One-time schema setup: collections, validators, indexes.
//!
//! The initializer is idempotent and safe to re-run at every startup.
//! Validators and indexes the store rejects (for example a new unique
//! index over pre-existing duplicate data) are logged and skipped rather
//! than aborting startup.

mod indexes;
mod validation;

use bson::{Document, doc};
use mongodb::Database;
use mongodb::error::ErrorKind as MongoErrorKind;
use tracing::{debug, info, warn};

use eventide_core::Entity;
use eventide_core::result::AppResult;
use eventide_entity::{Category, Comment, Event, Performer, Rating, Ticket, User, Venue};

use crate::error::map_store_error;

/// Server error code for "collection already exists".
const NAMESPACE_EXISTS: i32 = 48;

/// All collections the platform persists into.
pub const COLLECTIONS: [&str; 8] = [
    User::COLLECTION,
    Event::COLLECTION,
    Venue::COLLECTION,
    Category::COLLECTION,
    Ticket::COLLECTION,
    Rating::COLLECTION,
    Comment::COLLECTION,
    Performer::COLLECTION,
];

/// Idempotent schema initializer.
pub struct SchemaInitializer {
    database: Database,
}

impl SchemaInitializer {
    /// Create an initializer for the given database.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Ensure collections exist, then apply validators and indexes.
    pub async fn run(&self) -> AppResult<()> {
        info!("Starting schema initialization");
        self.ensure_collections().await?;
        self.apply_validators().await;
        self.apply_indexes().await;
        info!("Schema initialization completed");
        Ok(())
    }

    async fn ensure_collections(&self) -> AppResult<()> {
        let existing = self
            .database
            .list_collection_names()
            .await
            .map_err(|e| map_store_error(e, "Failed to list collections"))?;

        for name in COLLECTIONS {
            if existing.iter().any(|n| n == name) {
                debug!(collection = name, "Collection already exists");
                continue;
            }
            info!(collection = name, "Creating collection");
            if let Err(e) = self.database.create_collection(name).await {
                // A concurrent initializer may have won the race.
                if let MongoErrorKind::Command(command_error) = &*e.kind {
                    if command_error.code == NAMESPACE_EXISTS {
                        continue;
                    }
                }
                return Err(map_store_error(e, "Failed to create collection"));
            }
        }
        Ok(())
    }

    async fn apply_validators(&self) {
        for (name, schema) in validation::validators() {
            let command = doc! {
                "collMod": name,
                "validator": { "$jsonSchema": schema },
                "validationLevel": "moderate",
            };
            if let Err(e) = self.database.run_command(command).await {
                warn!(collection = name, error = %e, "Validator not applied, skipping");
            }
        }
    }

    async fn apply_indexes(&self) {
        for (name, models) in indexes::index_models() {
            let collection = self.database.collection::<Document>(name);
            for model in models {
                let keys = model.keys.clone();
                if let Err(e) = collection.create_index(model).await {
                    warn!(
                        collection = name,
                        index = %keys,
                        error = %e,
                        "Index not created, skipping"
                    );
                }
            }
        }
    }
}
