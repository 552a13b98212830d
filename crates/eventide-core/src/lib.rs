//! # eventide-core
//!
//! Core crate for the Eventide events platform. Contains the base-entity
//! contract, the generic repository trait, configuration schemas,
//! pagination/sorting/filter types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Eventide crates.

pub mod config;
pub mod entity;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use entity::Entity;
pub use error::AppError;
pub use result::AppResult;
