use std::collections::BTreeMap;

use crate::diff::result::{DiffEntry, DiffReport};
use crate::unique::{NodeWrapper, UniquePaths};

/// Format a diff report as plain text, or "" when the documents are equivalent.
pub fn format_text(report: &DiffReport) -> String {
    if report.is_equivalent() {
        return String::new();
    }

    let width = report.paths().map(str::len).max().unwrap_or(0) + 8;
    let mut lines = vec!["Different items".to_string()];

    for entry in report.entries() {
        lines.push("=".repeat(width));
        lines.push(entry.path().to_string());
        for (label, nodes) in [("root1", entry.left()), ("root2", entry.right())] {
            let Some(nodes) = nodes else {
                continue;
            };
            lines.push(format!("  {label}"));
            for node in nodes {
                push_node(&mut lines, node);
            }
        }
    }

    lines.join("\n")
}

/// Format a simple summary of diff counts.
pub fn format_summary(report: &DiffReport) -> String {
    let mut only_left = 0;
    let mut only_right = 0;
    let mut changed = 0;

    for entry in report.entries() {
        match entry {
            DiffEntry::OnlyLeft { .. } => only_left += 1,
            DiffEntry::OnlyRight { .. } => only_right += 1,
            DiffEntry::Changed { .. } => changed += 1,
        }
    }

    format!("only_left={only_left} only_right={only_right} changed={changed}")
}

/// Format one document's path map. Paths holding several elements list
/// each of them.
pub fn format_paths(paths: &UniquePaths, non_unique_only: bool) -> String {
    let mut lines = Vec::new();
    for (path, nodes) in paths.paths() {
        if nodes.len() > 1 {
            lines.push(format!("{path} [{}]", nodes.len()));
            for node in nodes {
                lines.push(format!("    Line {}: {}", line_hint(node), node.raw_path));
            }
        } else if !non_unique_only {
            lines.push(path.clone());
        }
    }
    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &NodeWrapper) {
    lines.push(format!("    Line {}:", line_hint(node)));
    lines.push(format!("            Path = {}", node.raw_path));
    if !node.attributes.is_empty() {
        lines.push(format!(
            "      Attributes = {}",
            format_attributes(&node.attributes)
        ));
    }
    if let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("            Text = {text}"));
    }
}

fn line_hint(node: &NodeWrapper) -> String {
    node.line
        .map(|line| line.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn format_attributes(attributes: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{key}={value:?}"))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
