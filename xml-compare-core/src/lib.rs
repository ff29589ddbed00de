//! Order-resilient XML comparison.
//!
//! Each element of a document is given a "unique path" built from its tag and
//! a fragment taken from the first preferred attribute it carries, or from its
//! text. The two documents are then compared path by path, treating the
//! elements found at a path as a set, so reordering siblings that the
//! heuristic can tell apart does not produce a difference.
//!
//! ```
//! use xml_compare_core::{compare_trees, parse, UniquePathOptions};
//!
//! let left = parse(br#"<r><i name="a">1</i><i name="b">2</i></r>"#).unwrap();
//! let right = parse(br#"<r><i name="b">2</i><i name="a">1</i></r>"#).unwrap();
//! let opts = UniquePathOptions {
//!     attributes: vec!["name".to_string()],
//!     ..UniquePathOptions::default()
//! };
//!
//! assert!(compare_trees(&left, &right, &opts).is_equivalent());
//! ```

pub mod diff;
pub mod format;
pub mod parser;
pub mod tree;
pub mod unique;

pub use diff::{compare, compare_trees, DiffEntry, DiffReport};
pub use format::{format_json, format_paths, format_paths_json, format_summary, format_text};
pub use parser::{parse, parse_file, ParseError};
pub use tree::XmlNode;
pub use unique::{NodeWrapper, PathMap, UniquePathOptions, UniquePaths, DEFAULT_MAX_TEXT_LEN};
