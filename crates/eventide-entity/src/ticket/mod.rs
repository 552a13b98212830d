//! Ticket entity.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::TicketKind;
pub use model::Ticket;
pub use status::TicketStatus;
