use std::path::PathBuf;

use xml_compare_core::{
    compare_trees, format_json, format_summary, format_text, parse_file, DiffEntry,
    UniquePathOptions,
};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn catalog_options() -> UniquePathOptions {
    UniquePathOptions {
        attributes: vec!["name".to_string(), "value".to_string()],
        ..UniquePathOptions::default()
    }
}

#[test]
fn reordered_document_is_equivalent() {
    let left = parse_file(&fixture("fixtures/catalog_a.xml")).expect("left parse");
    let right = parse_file(&fixture("fixtures/catalog_a_reordered.xml")).expect("right parse");

    let report = compare_trees(&left, &right, &catalog_options());
    assert!(report.is_equivalent(), "unexpected: {:?}", report);
    assert_eq!(format_text(&report), "");
}

#[test]
fn diff_detects_changes_insertions_and_removals() {
    let left = parse_file(&fixture("fixtures/catalog_a.xml")).expect("left parse");
    let right = parse_file(&fixture("fixtures/catalog_b.xml")).expect("right parse");

    let report = compare_trees(&left, &right, &catalog_options());

    let paths: Vec<&str> = report.paths().collect();
    assert_eq!(
        paths,
        vec![
            "/Catalog/Items/Itembeta/Value2",
            "/Catalog/Items/Itembeta/Value20",
            "/Catalog/Items/Itemdelta",
            "/Catalog/Items/Itemdelta/Value4",
            "/Catalog/Settings/Optionretries",
        ]
    );

    assert!(matches!(
        report.get("/Catalog/Items/Itembeta/Value2"),
        Some(DiffEntry::OnlyLeft { .. })
    ));
    assert!(matches!(
        report.get("/Catalog/Items/Itemdelta"),
        Some(DiffEntry::OnlyRight { .. })
    ));

    let retries = report
        .get("/Catalog/Settings/Optionretries")
        .expect("retries entry");
    let left_value = retries.left().expect("left side")[0].attributes.get("value");
    let right_value = retries.right().expect("right side")[0].attributes.get("value");
    assert_eq!(left_value.map(String::as_str), Some("3"));
    assert_eq!(right_value.map(String::as_str), Some("5"));
}

#[test]
fn formatters_describe_the_report() {
    let left = parse_file(&fixture("fixtures/catalog_a.xml")).expect("left parse");
    let right = parse_file(&fixture("fixtures/catalog_b.xml")).expect("right parse");
    let report = compare_trees(&left, &right, &catalog_options());

    let text = format_text(&report);
    let json = format_json(&report);
    let summary = format_summary(&report);

    assert!(text.starts_with("Different items\n"));
    assert!(text.contains("/Catalog/Items/Itembeta/Value2\n  root1\n    Line 12:"));
    assert!(text.contains("            Path = /Catalog/Items/Item[2]/Value"));
    assert!(text.contains("      Attributes = {name=\"retries\", value=\"5\"}"));
    assert!(text.contains("            Text = 20"));

    assert!(json.contains("\"type\": \"Changed\""));
    assert!(json.contains("\"equivalent\": false"));
    assert_eq!(summary, "only_left=1 only_right=3 changed=1");
}
