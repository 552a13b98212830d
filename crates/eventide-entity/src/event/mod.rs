//! Event entity.

pub mod model;
pub mod status;

pub use model::{Event, PerformerDetail, PerformerRole};
pub use status::EventStatus;
