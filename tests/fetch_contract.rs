//! Construction talks to the fetcher exactly once per call kind.

use mockall::predicate::eq;
use mockall::{mock, Sequence};
use pubchem_record::{
    Cid, Document, Identifier, Node, PubchemRecord, RecordConfig, RecordError, RecordFetcher,
    Result, Section,
};

mock! {
    pub Fetcher {}

    impl RecordFetcher for Fetcher {
        fn resolve(&self, identifier: &Identifier) -> Result<Cid>;
        fn fetch_record(&self, cid: Cid) -> Result<Document>;
    }
}

fn water() -> Document {
    Document::new(vec![Section::new("Names and Identifiers").with_child(
        Section::new("CAS").with_child(Node::text("7732-18-5")),
    )])
    .with_record_title("Water")
    .with_record_number(Cid(962))
}

#[test]
fn test_resolve_then_fetch_once() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut fetcher = MockFetcher::new();
    let mut seq = Sequence::new();

    fetcher
        .expect_resolve()
        .with(eq(Identifier::Name("water".into())))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Cid(962)));
    fetcher
        .expect_fetch_record()
        .with(eq(Cid(962)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(water()));

    let rec = PubchemRecord::fetch(&fetcher, "water", RecordConfig::default()).unwrap();

    // Queries run against the cache; the mock would panic on another call.
    assert_eq!(rec.cas_number().unwrap(), vec!["7732-18-5"]);
    assert_eq!(rec.cas_number().unwrap(), vec!["7732-18-5"]);
    assert_eq!(rec.name(), Some("Water"));
}

#[test]
fn test_not_found_skips_fetch() {
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_resolve()
        .times(1)
        .returning(|id| Err(RecordError::NotFound(id.to_string())));
    fetcher.expect_fetch_record().never();

    let result = PubchemRecord::fetch(&fetcher, "unobtainium", RecordConfig::default());
    assert!(matches!(result, Err(RecordError::NotFound(_))));
}

#[test]
fn test_network_error_surfaces_without_retry() {
    let mut fetcher = MockFetcher::new();
    fetcher.expect_resolve().times(1).returning(|_| Ok(Cid(962)));
    fetcher
        .expect_fetch_record()
        .times(1)
        .returning(|_| Err(RecordError::Network("connection reset".into())));

    let result = PubchemRecord::fetch(&fetcher, 962u64, RecordConfig::default());
    assert!(matches!(result, Err(RecordError::Network(_))));
}
