use colored::Colorize;
use xml_compare_core::{format_paths, format_summary, format_text, DiffReport, UniquePaths};

/// Render a diff report for terminal output.
pub fn render_text(report: &DiffReport) -> String {
    let raw = format_text(report);
    let mut out = Vec::new();
    let mut after_banner = false;

    for line in raw.lines() {
        let colored = if line.starts_with('=') {
            line.dimmed().to_string()
        } else if after_banner {
            line.yellow().bold().to_string()
        } else if line == "  root1" {
            line.red().to_string()
        } else if line == "  root2" {
            line.green().to_string()
        } else if line == "Different items" {
            line.bold().to_string()
        } else {
            line.to_string()
        };
        // The line after each banner is the differing path.
        after_banner = line.starts_with('=');
        out.push(colored);
    }

    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(report: &DiffReport) -> String {
    format_summary(report).cyan().to_string()
}

/// Render a path map, highlighting paths that are not unique.
pub fn render_paths(paths: &UniquePaths, non_unique_only: bool) -> String {
    let raw = format_paths(paths, non_unique_only);
    raw.lines()
        .map(|line| {
            if line.starts_with("    ") {
                line.to_string()
            } else if line.ends_with(']') && line.contains(" [") {
                line.yellow().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
