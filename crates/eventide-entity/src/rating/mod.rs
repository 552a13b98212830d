//! Rating entity.

pub mod model;

pub use model::Rating;
