//! Comment entity.

pub mod model;
pub mod status;

pub use model::Comment;
pub use status::CommentStatus;
