//! Core type definitions used across the Eventide workspace.

pub mod filter;
pub mod pagination;
pub mod sorting;

pub use filter::{Filter, FilterField, FilterOp, FilterValue};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField};
