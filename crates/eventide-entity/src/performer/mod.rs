//! Performer entity.

pub mod kind;
pub mod model;

pub use kind::PerformerKind;
pub use model::Performer;
