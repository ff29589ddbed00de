use serde_json::json;

use crate::diff::result::{DiffEntry, DiffReport};
use crate::unique::UniquePaths;

/// Format a diff report as JSON.
pub fn format_json(report: &DiffReport) -> String {
    let entries: Vec<&DiffEntry> = report.entries().collect();
    let value = json!({
        "equivalent": report.is_equivalent(),
        "entries": entries,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// Format one document's path map as JSON.
pub fn format_paths_json(paths: &UniquePaths) -> String {
    serde_json::to_string_pretty(paths).unwrap_or_else(|_| "{}".to_string())
}
