//! Integration tests for the full pipeline
//!
//! Tests the path: sequences → enumerate → reconcile → rank → report

use motif_discovery::core::{
    Discovery, MaskEnumerator, PatternReconciler, PatternScorer, format_identical,
};
use motif_discovery::types::{
    DiscoveryConfig, EnumeratorConfig, PatternSet, SymbolSequence, has_significant,
};
use pretty_assertions::assert_eq;

fn canonical_config() -> DiscoveryConfig {
    DiscoveryConfig {
        enumerator: EnumeratorConfig {
            emit_raw: false,
            ..EnumeratorConfig::default()
        },
        ..DiscoveryConfig::default()
    }
}

fn enumerate(text: &str, emit_raw: bool) -> PatternSet {
    let enumerator = MaskEnumerator::with_config(EnumeratorConfig {
        emit_raw,
        ..EnumeratorConfig::default()
    })
    .unwrap();
    enumerator.enumerate(&SymbolSequence::parse(text).unwrap()).unwrap()
}

/// Ab vs Ac: the b/c divergence only survives as a wildcard in raw variants
#[test]
fn test_ab_ac_with_raw_variants() {
    let report = Discovery::new().run("Ab", "Ac").unwrap();

    assert_eq!(report.reference_length, 2);
    assert_eq!(report.pattern_set_sizes, (5, 5));
    assert_eq!(report.pattern_strings(), vec!["A-x", "A"]);
    assert!(report.patterns.iter().all(|p| p.score == 4));
}

#[test]
fn test_ab_ac_canonical_only() {
    let report = Discovery::with_config(canonical_config()).unwrap().run("Ab", "Ac").unwrap();
    assert_eq!(report.pattern_strings(), vec!["A"]);
}

/// Runs of different length between the same anchors become a range
#[test]
fn test_aligned_range_ranks_first() {
    let report = Discovery::with_config(canonical_config()).unwrap().run("AbC", "AcdC").unwrap();

    assert_eq!(report.reference_length, 4);
    assert_eq!(report.pattern_set_sizes, (6, 12));
    assert_eq!(report.pattern_strings(), vec!["A-x(1,2)-C", "A", "C"]);
    assert_eq!(report.best().unwrap().score, 34);
}

/// Pattern sets reconciled with themselves yield only the Identical-Format
#[test]
fn test_self_reconciliation_is_identical_format() {
    let set = enumerate("AbCdE", false);
    let out = PatternReconciler::new().reconcile(&set, &set);

    let expected: Vec<String> = set
        .iter()
        .map(format_identical)
        .filter(|p| has_significant(p))
        .collect();
    assert_eq!(out, expected);

    // Digits only ever appear wrapped as x(d)
    for pattern in &out {
        let stray_digit = pattern
            .split('-')
            .any(|tok| !tok.starts_with("x(") && tok.chars().any(|c| c.is_ascii_digit()));
        assert!(!stray_digit, "digit outside a gap token in {}", pattern);
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let discovery = Discovery::new();
    let first = discovery.run("AbCdE", "AcCbE").unwrap();
    let second = discovery.run("AbCdE", "AcCbE").unwrap();
    assert_eq!(first.pattern_strings(), second.pattern_strings());
    assert_eq!(first.reconciled_count, second.reconciled_count);
}

#[test]
fn test_ranked_scores_are_non_increasing() {
    let report = Discovery::new().run("GaTtAc", "GcTaAc").unwrap();
    assert!(!report.patterns.is_empty());
    assert!(report.patterns.windows(2).all(|w| w[0].score >= w[1].score));

    let scorer = PatternScorer::new();
    for scored in &report.patterns {
        assert_eq!(scored.score, scorer.score(&scored.pattern, report.reference_length));
    }
}

#[test]
fn test_no_shared_significant_symbols() {
    let report = Discovery::new().run("Ab", "Cd").unwrap();
    assert!(report.patterns.is_empty());
}

#[test]
fn test_json_report() {
    let report = Discovery::new().run("AbC", "AcC").unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["sequence_a"], "AbC");
    assert_eq!(json["reference_length"], 3);
    assert!(json["patterns"].is_array());
    assert!(json["patterns"][0]["score"].is_u64());
}
