//! Report formatters.

pub mod json;
pub mod text;

pub use json::{format_json, format_paths_json};
pub use text::{format_paths, format_summary, format_text};
