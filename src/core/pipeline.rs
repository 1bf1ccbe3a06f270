//! Discovery pipeline: one pair of sequences → ranked report

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use crate::core::{MaskEnumerator, PatternReconciler, PatternScorer};
use crate::types::{DiscoveryConfig, DiscoveryError, DiscoveryReport, Result, SymbolSequence};

/// Runs enumerate → enumerate → reconcile → rank for a pair of sequences
#[derive(Debug, Default)]
pub struct Discovery {
    config: DiscoveryConfig,
    enumerator: MaskEnumerator,
    reconciler: PatternReconciler,
    scorer: PatternScorer,
}

impl Discovery {
    /// Create pipeline with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create pipeline with explicit settings
    pub fn with_config(config: DiscoveryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            enumerator: MaskEnumerator::with_config(config.enumerator.clone())?,
            reconciler: PatternReconciler::new(),
            scorer: PatternScorer::new(),
            config,
        })
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Parse both inputs and run the pipeline
    pub fn run(&self, text_a: &str, text_b: &str) -> Result<DiscoveryReport> {
        let seq_a = SymbolSequence::parse(text_a)?;
        let seq_b = SymbolSequence::parse(text_b)?;
        self.run_sequences(&seq_a, &seq_b)
    }

    /// Run the pipeline on already parsed sequences
    pub fn run_sequences(&self, seq_a: &SymbolSequence, seq_b: &SymbolSequence) -> Result<DiscoveryReport> {
        if seq_a.is_empty() || seq_b.is_empty() {
            return Err(DiscoveryError::EmptySequence);
        }

        let start = Instant::now();

        let set_a = self.enumerator.enumerate(seq_a)?;
        let set_b = self.enumerator.enumerate(seq_b)?;

        let mut patterns = self.reconciler.reconcile(&set_a, &set_b);
        let reconciled_count = patterns.len();

        if self.config.unique_patterns {
            let mut seen = HashSet::new();
            patterns.retain(|p| seen.insert(p.clone()));
            debug!(before = reconciled_count, after = patterns.len(), "deduplicated patterns");
        }

        let reference_length = seq_a.len().max(seq_b.len());
        let mut ranked = self.scorer.rank_scored(&patterns, reference_length);
        if let Some(top) = self.config.top {
            ranked.truncate(top);
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            sequence_a = %seq_a,
            sequence_b = %seq_b,
            patterns = ranked.len(),
            elapsed_ms,
            "discovery complete"
        );

        Ok(DiscoveryReport {
            timestamp: Utc::now(),
            sequence_a: seq_a.to_string(),
            sequence_b: seq_b.to_string(),
            reference_length,
            pattern_set_sizes: (set_a.len(), set_b.len()),
            reconciled_count,
            patterns: ranked,
            elapsed_ms,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
