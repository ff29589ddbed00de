//! Order-resilient XML comparison tool.
//!
//! Thin layer over `xml-compare-core`: resolves comparison settings from the
//! built-in defaults, an optional TOML file and command-line overrides, and
//! renders reports for the terminal.
//!
//! - [`config`]: settings loading and validation
//! - [`report`]: colored terminal rendering

pub mod config;
pub mod report;
