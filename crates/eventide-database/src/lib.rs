//! # eventide-database
//!
//! MongoDB connection management, the generic [`MongoRepository`]
//! implementation of the `eventide-core` repository trait, filter/sort
//! translation, and the idempotent schema initializer (collections,
//! validators, indexes).

pub mod connection;
pub mod query;
pub mod repository;
pub mod schema;

mod error;

pub use connection::DatabaseHandle;
pub use query::FieldNaming;
pub use repository::MongoRepository;
pub use schema::SchemaInitializer;
