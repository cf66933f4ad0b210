//! Error handling and edge case tests.

use pubchem_record::{
    extract, find_all, Cid, Digger, Document, InMemoryFetcher, Node, PubchemRecord, RecordConfig,
    RecordError, Section,
};
use serde_json::json;

fn fetcher_with(value: serde_json::Value) -> InMemoryFetcher {
    InMemoryFetcher::new()
        .with_record(Cid(1), value)
        .with_alias("compound", Cid(1))
}

// --- Construction Errors ---

#[test]
fn test_unknown_identifier() {
    let fetcher = fetcher_with(json!({"Record": {}}));
    let result = PubchemRecord::fetch(&fetcher, "unobtainium", RecordConfig::default());
    assert!(matches!(result, Err(RecordError::NotFound(_))));
}

#[test]
fn test_malformed_record_aborts_construction() {
    let fetcher = fetcher_with(json!({"Record": {"Section": [{"Information": []}]}}));
    let result = PubchemRecord::fetch(&fetcher, "compound", RecordConfig::default());
    assert!(matches!(result, Err(RecordError::UpstreamFormat(_))));
}

#[test]
fn test_non_object_record() {
    let fetcher = fetcher_with(json!({"Record": "gone"}));
    let result = PubchemRecord::fetch(&fetcher, "compound", RecordConfig::default());
    assert!(matches!(result, Err(RecordError::UpstreamFormat(_))));
}

#[test]
fn test_boolean_with_wrong_type() {
    let fetcher = fetcher_with(json!({"Record": {"Section": [{
        "TOCHeading": "Flammable",
        "Information": [{"Value": {"Boolean": ["yes"]}}]
    }]}}));
    let result = PubchemRecord::fetch(&fetcher, "compound", RecordConfig::default());
    assert!(matches!(result, Err(RecordError::UpstreamFormat(_))));
}

#[test]
fn test_overly_deep_record() {
    let mut section = json!({"TOCHeading": "bottom"});
    for i in 0..100 {
        section = json!({"TOCHeading": format!("level {}", i), "Section": [section]});
    }
    let fetcher = fetcher_with(json!({"Record": {"Section": [section]}}));

    let result = PubchemRecord::fetch(&fetcher, "compound", RecordConfig::default());
    assert!(matches!(result, Err(RecordError::DepthExceeded { .. })));
}

// --- Query Errors ---

#[test]
fn test_missing_optional_parts_are_not_errors() {
    let fetcher = fetcher_with(json!({"Record": {"Section": [
        {"TOCHeading": "Density"},
        {"TOCHeading": "CAS", "Information": [{"ReferenceNumber": 1}]},
        {"TOCHeading": "InChI", "Information": null, "Section": "broken"}
    ]}}));
    let rec = PubchemRecord::fetch(&fetcher, "compound", RecordConfig::default()).unwrap();

    assert!(rec.density().unwrap().is_empty());
    assert!(rec.cas_number().unwrap().is_empty());
    assert!(rec.inchi().unwrap().is_empty());
    assert_eq!(rec.list_keys().unwrap().len(), 3);
}

#[test]
fn test_extract_section_is_not_a_leaf() {
    let result = extract(&Node::Section(Section::new("Experimental Properties")));
    assert!(matches!(result, Err(RecordError::NotALeaf { .. })));
}

#[test]
fn test_absent_label_vs_structural_violation() {
    let doc = Document::new(vec![Section::new("CAS").with_child(Node::text("64-17-5"))]);

    // Absence is an empty result...
    assert!(find_all(&doc, "Density").unwrap().is_empty());

    // ...while a structural violation raises.
    let hits = find_all(&doc, "CAS").unwrap();
    assert!(matches!(
        extract(&Node::Section(hits[0].section.clone())),
        Err(RecordError::NotALeaf { .. })
    ));
}

#[test]
fn test_query_failure_leaves_record_intact() {
    let doc = Document::new(vec![Section::new("a")
        .with_child(Section::new("b").with_child(Section::new("c").with_child(Node::text("x"))))]);
    let rec = PubchemRecord::from_document(Cid(9), doc.clone(), RecordConfig { max_depth: 2 });

    assert!(matches!(
        rec.query("c"),
        Err(RecordError::DepthExceeded { limit: 2 })
    ));
    assert_eq!(rec.raw_record(), &doc);

    // A record with room to spare answers the same query.
    let roomy = PubchemRecord::from_document(Cid(9), doc, RecordConfig::default());
    assert_eq!(roomy.query("c").unwrap().len(), 1);
}

#[test]
fn test_digger_depth_guard() {
    let mut section = Section::new("target");
    for i in 0..20 {
        section = Section::new(format!("wrapper {}", i)).with_child(section);
    }
    let doc = Document::new(vec![section]);

    assert!(matches!(
        Digger::new(8).find_all(&doc, "target"),
        Err(RecordError::DepthExceeded { limit: 8 })
    ));
    assert_eq!(Digger::default().find_all(&doc, "target").unwrap().len(), 1);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RecordError::NotFound("name:unobtainium".into()).to_string(),
        "Compound not found: name:unobtainium"
    );
    assert_eq!(
        RecordError::DepthExceeded { limit: 64 }.to_string(),
        "Maximum nesting depth 64 exceeded"
    );
    assert_eq!(
        RecordError::NotALeaf { label: "CAS".into() }.to_string(),
        "Section 'CAS' is not a leaf"
    );
}
