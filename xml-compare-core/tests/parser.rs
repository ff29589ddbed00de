use std::path::PathBuf;

use xml_compare_core::{parse, parse_file, ParseError, XmlNode};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

/// First child of `node` tagged `tag`.
fn child<'a>(node: &'a XmlNode, tag: &str) -> &'a XmlNode {
    node.children
        .iter()
        .find(|c| c.tag == tag)
        .unwrap_or_else(|| panic!("{} should have a {tag} child", node.tag))
}

#[test]
fn parses_attributes_empty_and_nested_elements() {
    let node = parse_file(&fixture("fixtures/catalog_a.xml")).expect("parse should succeed");
    assert_eq!(node.tag, "Catalog");

    let options = &child(&node, "Settings").children;
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].attributes.get("name"), Some(&"timeout".to_string()));
    assert!(options[0].children.is_empty());

    let items = child(&node, "Items");
    assert_eq!(items.children.len(), 3);
    assert_eq!(child(&items.children[0], "Value").text.as_deref(), Some("1"));
}

#[test]
fn records_source_lines() {
    let node = parse_file(&fixture("fixtures/catalog_a.xml")).expect("parse should succeed");
    assert_eq!(node.line, Some(2));

    let beta_value = node
        .walk()
        .find(|visit| visit.path == "/Catalog/Items/Item[2]/Value")
        .expect("beta value should be walked")
        .node;
    assert_eq!(beta_value.text.as_deref(), Some("2"));
    assert_eq!(beta_value.line, Some(12));
}

#[test]
fn comments_and_blank_text_are_dropped() {
    let node = parse_file(&fixture("fixtures/catalog_a.xml")).expect("parse should succeed");
    assert_eq!(node.text, None);
    assert_eq!(node.children.len(), 3);
    assert_eq!(child(&node, "Items").text, None);
}

#[test]
fn unescapes_entities_and_keeps_cdata() {
    let node = parse(br#"<r a="x &amp; y"><t>1 &lt; 2</t><c><![CDATA[<raw>]]></c></r>"#)
        .expect("parse should succeed");

    assert_eq!(node.attributes.get("a").map(String::as_str), Some("x & y"));
    assert_eq!(child(&node, "t").text.as_deref(), Some("1 < 2"));
    assert_eq!(child(&node, "c").text.as_deref(), Some("<raw>"));
}

#[test]
fn mixed_content_keeps_only_leading_text() {
    let node = parse(b"<r><a>x<b/>y</a><c>head<d>inner</d>tail<e/>more</c></r>")
        .expect("parse should succeed");

    let a = child(&node, "a");
    assert_eq!(a.text.as_deref(), Some("x"));
    assert_eq!(child(a, "b").text, None);

    let c = child(&node, "c");
    assert_eq!(c.text.as_deref(), Some("head"));
    assert_eq!(child(c, "d").text.as_deref(), Some("inner"));
}

#[test]
fn namespace_declarations_do_not_become_attributes() {
    let node = parse(br#"<r xmlns="urn:d" xmlns:p="urn:p"><p:a p:id="1" xmlns:q="urn:q"/></r>"#)
        .expect("parse should succeed");

    assert!(node.attributes.is_empty());
    let a = child(&node, "p:a");
    assert_eq!(a.attributes.len(), 1);
    assert_eq!(a.attributes.get("p:id").map(String::as_str), Some("1"));
}

#[test]
fn rejects_malformed_documents() {
    assert!(parse_file(&fixture("fixtures/malformed.xml")).is_err());
    assert!(matches!(
        parse(b"<a/><b/>"),
        Err(ParseError::Malformed(_))
    ));
    assert!(parse(b"<a>").is_err());
    assert!(matches!(
        parse(b"<!-- nothing -->"),
        Err(ParseError::Malformed(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let err = parse_file(&dir.path().join("absent.xml")).expect_err("should fail");
    assert!(matches!(err, ParseError::Io(_)));
}
