//! Venue entity.

pub mod model;

pub use model::{GeoPoint, Venue};
