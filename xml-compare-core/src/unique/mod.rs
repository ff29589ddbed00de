//! Attribute/text based unique paths for every element of a tree.
//!
//! Index-based paths (`/root/item[2]`) change whenever siblings move. Here each
//! element's path segment is its tag followed by a uniqueness fragment taken
//! from a preferred attribute or from its text, so equivalent elements land
//! on the same path regardless of sibling order.

pub mod paths;
pub mod wrapper;

pub use paths::{PathMap, UniquePathOptions, UniquePaths, DEFAULT_MAX_TEXT_LEN};
pub use wrapper::NodeWrapper;
