//! End-to-end cascade behavior over small in-memory batches.

use sku_model::{
    CatalogEntry, FuzzyScorer, MatchStrategy, NormVariant, PipelineOptions, ResolveError,
    SalesRecord,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("sku_match=debug")
        .try_init();
}

fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("AB-123", "Widgets"),
        CatalogEntry::new("XY99", "Sprockets"),
        CatalogEntry::new("00777", "Fasteners"),
    ]
}

#[test]
fn every_record_ends_up_with_a_category_and_strategy() {
    init_tracing();
    let catalog = sample_catalog();
    let mut records = vec![
        SalesRecord::new("AB-123"),
        SalesRecord::new("ab123"),
        SalesRecord::new("XY99Q"),
        SalesRecord::new("TOTALE VENDITE"),
        SalesRecord::new(""),
        SalesRecord::new("garbage-in"),
    ];
    sku_match::run(&mut records, &catalog, &PipelineOptions::default()).expect("run");

    for record in &records {
        let resolution = record
            .resolution
            .as_ref()
            .unwrap_or_else(|| panic!("record '{}' left unresolved", record.article_code));
        assert!(!resolution.category.is_empty());
    }
}

#[test]
fn punctuation_mismatch_resolves_via_aggressive_variant() {
    init_tracing();
    let catalog = sample_catalog();
    let mut records = vec![SalesRecord::new("ab123")];
    sku_match::run(&mut records, &catalog, &PipelineOptions::default()).expect("run");

    let resolution = records[0].resolution.as_ref().expect("resolved");
    assert_eq!(resolution.category, "Widgets");
    assert_eq!(
        resolution.strategy,
        MatchStrategy::Exact(NormVariant::Aggressive)
    );
    assert_eq!(resolution.confidence, Some(100.0));
}

#[test]
fn subtotal_rows_override_any_other_match() {
    init_tracing();
    // "TOTALE5" would exact-match the catalog row without the override.
    let catalog = vec![CatalogEntry::new("TOTALE5", "ShouldNeverWin")];
    let mut records = vec![
        SalesRecord::new("TOTALE5"),
        SalesRecord::new("Totale vendite"),
        SalesRecord::new("riepilogo totale"),
    ];
    sku_match::run(&mut records, &catalog, &PipelineOptions::default()).expect("run");

    for record in &records {
        let resolution = record.resolution.as_ref().expect("resolved");
        assert_eq!(resolution.category, "TOTALE");
        assert_eq!(resolution.strategy, MatchStrategy::SpecialCase);
        assert_eq!(resolution.confidence, Some(100.0));
    }
}

#[test]
fn near_miss_resolves_via_fuzzy_with_scorer_confidence() {
    init_tracing();
    let catalog = vec![CatalogEntry::new("ABCX", "Widgets")];
    let mut records = vec![SalesRecord::new("ABCD")];
    // One substitution in four characters scores exactly 75.
    sku_match::run(&mut records, &catalog, &PipelineOptions::with_score_cutoff(75.0))
        .expect("run");

    let resolution = records[0].resolution.as_ref().expect("resolved");
    assert_eq!(
        resolution.strategy,
        MatchStrategy::Fuzzy(FuzzyScorer::PartialRatio)
    );
    assert_eq!(resolution.confidence, Some(75.0));
}

#[test]
fn below_cutoff_candidate_falls_through_to_no_match() {
    init_tracing();
    let catalog = vec![CatalogEntry::new("ABCX", "Widgets")];
    let mut records = vec![SalesRecord::new("ABCD")];
    sku_match::run(&mut records, &catalog, &PipelineOptions::default()).expect("run");

    // 75 < 80, no truncation of "ABCD" is in the catalog either.
    let resolution = records[0].resolution.as_ref().expect("resolved");
    assert_eq!(resolution.category, "Unknown");
    assert_eq!(resolution.strategy, MatchStrategy::NoMatch);
    assert_eq!(resolution.confidence, None);
}

#[test]
fn empty_code_falls_through_to_no_match() {
    init_tracing();
    let catalog = sample_catalog();
    let mut records = vec![SalesRecord::new(""), SalesRecord::new("   ")];
    sku_match::run(&mut records, &catalog, &PipelineOptions::default()).expect("run");

    for record in &records {
        let resolution = record.resolution.as_ref().expect("resolved");
        assert_eq!(resolution.category, "Unknown");
        assert_eq!(resolution.strategy, MatchStrategy::NoMatch);
    }
}

#[test]
fn empty_catalog_aborts_without_touching_records() {
    init_tracing();
    let mut records = vec![SalesRecord::new("AB-123")];
    let err = sku_match::run(&mut records, &[], &PipelineOptions::default()).unwrap_err();
    assert!(matches!(err, ResolveError::EmptyCatalog));
    assert!(!records[0].is_resolved());
}

#[test]
fn input_order_is_preserved() {
    init_tracing();
    let catalog = sample_catalog();
    let original: Vec<String> = vec!["XY99Q", "", "AB-123", "totale", "0777"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut records: Vec<SalesRecord> = original.iter().map(SalesRecord::new).collect();
    sku_match::run(&mut records, &catalog, &PipelineOptions::default()).expect("run");

    let after: Vec<&str> = records.iter().map(|r| r.article_code.as_str()).collect();
    assert_eq!(after, original.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn reruns_are_deterministic() {
    init_tracing();
    let catalog = sample_catalog();
    let make_records = || {
        vec![
            SalesRecord::new("AB-123"),
            SalesRecord::new("XY99Q"),
            SalesRecord::new("ABCD"),
            SalesRecord::new("totale"),
            SalesRecord::new(""),
        ]
    };
    let mut first = make_records();
    let mut second = make_records();
    let summary_first =
        sku_match::run(&mut first, &catalog, &PipelineOptions::default()).expect("run");
    let summary_second =
        sku_match::run(&mut second, &catalog, &PipelineOptions::default()).expect("run");

    assert_eq!(first, second);
    assert_eq!(summary_first, summary_second);
}

#[test]
fn leading_zero_codes_resolve_through_the_cascade() {
    init_tracing();
    let catalog = sample_catalog();
    let mut records = vec![SalesRecord::new("777")];
    sku_match::run(&mut records, &catalog, &PipelineOptions::default()).expect("run");

    let resolution = records[0].resolution.as_ref().expect("resolved");
    assert_eq!(resolution.category, "Fasteners");
    assert_eq!(
        resolution.strategy,
        MatchStrategy::Exact(NormVariant::NoLeadingZeros)
    );
}
