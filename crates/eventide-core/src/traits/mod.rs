//! Core traits defined in `eventide-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
