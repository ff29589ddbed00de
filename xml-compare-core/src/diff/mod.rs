//! Set-based reconciliation of two unique path maps.

pub mod engine;
pub mod result;

pub use engine::{compare, compare_trees};
pub use result::{DiffEntry, DiffReport};
