//! Pattern Scorer & Ranker
//!
//! Score = Σ gaps + plain·L + significant·L²
//! - gaps: every `x(n)` adds n, every `x(n,m)` adds max(n, m)
//! - L: reference length, max of the two input lengths

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{ScoredPattern, is_significant};
use crate::WILDCARD;

lazy_static! {
    static ref RE_GAP: Regex = Regex::new(r"x\((\d+)(?:,(\d+))?\)").unwrap();
}

/// Pattern scorer
#[derive(Debug, Default)]
pub struct PatternScorer;

impl PatternScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score one reconciled pattern
    pub fn score(&self, pattern: &str, reference_length: usize) -> u64 {
        let l = reference_length as u64;
        let gaps = gap_sum(pattern);

        let letters: u64 = pattern
            .chars()
            .filter(|&c| c.is_alphabetic() && c != WILDCARD)
            .map(|c| if is_significant(c) { l * l } else { l })
            .sum();

        gaps + letters
    }

    /// Sort by descending score; ties keep input order
    pub fn rank(&self, patterns: &[String], reference_length: usize) -> Vec<String> {
        self.rank_scored(patterns, reference_length)
            .into_iter()
            .map(|p| p.pattern)
            .collect()
    }

    /// Same order as `rank`, with scores attached
    pub fn rank_scored(&self, patterns: &[String], reference_length: usize) -> Vec<ScoredPattern> {
        let mut scored: Vec<ScoredPattern> = patterns
            .iter()
            .map(|p| ScoredPattern::new(p.as_str(), self.score(p, reference_length)))
            .collect();
        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

/// Sum of the largest number in every gap token
fn gap_sum(pattern: &str) -> u64 {
    RE_GAP
        .captures_iter(pattern)
        .map(|caps| {
            let first = parse_group(caps.get(1));
            let second = parse_group(caps.get(2));
            first.max(second)
        })
        .sum()
}

fn parse_group(group: Option<regex::Match<'_>>) -> u64 {
    group.and_then(|m| m.as_str().parse().ok()).unwrap_or(0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gap_sum() {
        assert_eq!(gap_sum("A-x(3)-B"), 3);
        assert_eq!(gap_sum("A-x(1,4)-B-x(2)"), 6);
        assert_eq!(gap_sum("A-B"), 0);
    }

    #[test]
    fn test_score_letters() {
        let scorer = PatternScorer::new();
        // A: 4, b: 2
        assert_eq!(scorer.score("A-b", 2), 6);
        // wildcard letters from raw variants are not counted
        assert_eq!(scorer.score("A-x-b", 2), 6);
    }

    #[test]
    fn test_score_gaps_and_letters() {
        let scorer = PatternScorer::new();
        // A, B: 2 * 9, range: 3
        assert_eq!(scorer.score("A-x(1,3)-B", 3), 21);
        assert_eq!(scorer.score("A-x(1)", 2), 5);
    }

    #[test]
    fn test_more_significant_scores_higher() {
        let scorer = PatternScorer::new();
        assert!(scorer.score("A-x(1)-B", 4) > scorer.score("A-x(1)-b", 4));
    }

    #[test]
    fn test_rank_descending() {
        let scorer = PatternScorer::new();
        let ranked = scorer.rank(&strings(&["b", "A-x(1)", "A-B"]), 2);
        assert_eq!(ranked, strings(&["A-B", "A-x(1)", "b"]));
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let scorer = PatternScorer::new();
        let ranked = scorer.rank(&strings(&["A-c", "B-d", "C", "A-e"]), 3);
        // A-c, B-d, A-e all score 12; C scores 9
        assert_eq!(ranked, strings(&["A-c", "B-d", "A-e", "C"]));
    }

    #[test]
    fn test_rank_scored_attaches_scores() {
        let scorer = PatternScorer::new();
        let scored = scorer.rank_scored(&strings(&["A", "A-B"]), 2);
        assert_eq!(scored, vec![ScoredPattern::new("A-B", 8), ScoredPattern::new("A", 4)]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(PatternScorer::new().rank(&[], 5).is_empty());
    }
}
