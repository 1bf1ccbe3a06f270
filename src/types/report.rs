//! Output structures for terminal and JSON display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::ScoredPattern;

/// Result of one discovery run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// First input sequence
    pub sequence_a: String,
    /// Second input sequence
    pub sequence_b: String,
    /// max(len_a, len_b), the scoring weight base
    pub reference_length: usize,
    /// Size of the pattern set of each sequence
    pub pattern_set_sizes: (usize, usize),
    /// Reconciled patterns before dedup/truncation
    pub reconciled_count: usize,
    /// Patterns by descending score
    pub patterns: Vec<ScoredPattern>,
    /// Wall time of the pipeline (milliseconds)
    pub elapsed_ms: u64,
}

impl DiscoveryReport {
    /// Best-ranked pattern, if any
    pub fn best(&self) -> Option<&ScoredPattern> {
        self.patterns.first()
    }

    /// Pattern strings only, in rank order
    pub fn pattern_strings(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.pattern.clone()).collect()
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self, verbose: bool) -> String {
        let mut out = format!(
            "{} ({}, {}) {}\n",
            "Patterns for".bold(),
            self.sequence_a.cyan(),
            self.sequence_b.cyan(),
            format!("[{} found]", self.patterns.len()).dimmed(),
        );
        if verbose {
            out.push_str(&format!(
                "{}\n",
                format!(
                    "  sets={}/{} reconciled={} reference_length={}",
                    self.pattern_set_sizes.0,
                    self.pattern_set_sizes.1,
                    self.reconciled_count,
                    self.reference_length
                )
                .dimmed()
            ));
        }
        let top_score = self.best().map(|p| p.score);
        for scored in &self.patterns {
            let line = if Some(scored.score) == top_score {
                scored.pattern.green().bold()
            } else {
                scored.pattern.normal()
            };
            if verbose {
                out.push_str(&format!("  {}\t{}\n", line, format!("({})", scored.score).yellow()));
            } else {
                out.push_str(&format!("  {}\n", line));
            }
        }
        out.push_str(&format!("{}", format!("Duration: {} ms", self.elapsed_ms).dimmed()));
        out
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self, verbose: bool) -> String {
        let mut out = format!(
            "sequences=({}, {}) | patterns={} | duration={}ms\n",
            self.sequence_a,
            self.sequence_b,
            self.patterns.len(),
            self.elapsed_ms
        );
        if verbose {
            out.push_str(&format!(
                "sets={}/{} | reconciled={} | reference_length={}\n",
                self.pattern_set_sizes.0,
                self.pattern_set_sizes.1,
                self.reconciled_count,
                self.reference_length
            ));
        }
        for scored in &self.patterns {
            out.push_str(&format!("{}\t({})\n", scored.pattern, scored.score));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiscoveryReport {
        DiscoveryReport {
            timestamp: Utc::now(),
            sequence_a: "Ab".to_string(),
            sequence_b: "Ac".to_string(),
            reference_length: 2,
            pattern_set_sizes: (6, 6),
            reconciled_count: 2,
            patterns: vec![ScoredPattern::new("A-x(1)", 5), ScoredPattern::new("A", 4)],
            elapsed_ms: 0,
        }
    }

    #[test]
    fn test_parseable_lists_every_pattern_with_score() {
        let text = sample().to_parseable_string(false);
        assert!(text.starts_with("sequences=(Ab, Ac) | patterns=2"));
        assert!(text.contains("A-x(1)\t(5)\n"));
        assert!(text.contains("A\t(4)\n"));
        assert!(!text.contains("reconciled="));
    }

    #[test]
    fn test_parseable_verbose_adds_run_details() {
        let text = sample().to_parseable_string(true);
        assert!(text.contains("sets=6/6 | reconciled=2 | reference_length=2"));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample();
        let json = serde_json::to_string(&report).unwrap();
        let back: DiscoveryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.patterns, report.patterns);
        assert_eq!(back.pattern_set_sizes, (6, 6));
    }

    #[test]
    fn test_best_is_first() {
        assert_eq!(sample().best().unwrap().pattern, "A-x(1)");
        assert_eq!(sample().pattern_strings(), vec!["A-x(1)", "A"]);
    }
}
