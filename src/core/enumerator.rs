//! Mask Enumerator: every wildcard mask of a sequence, canonicalized
//!
//! For a sequence of length n the 2^n masks are visited in ascending numeric
//! order, most significant bit = first position. Each masked sequence is
//! run-length encoded (`xxAxB` → `2A1B`) and then filtered:
//! - a run-length digit survives only if it is not the first or last
//!   character and neither neighbour is a digit (so `2A1B` → `A1B`);
//! - the candidate is kept only if it still holds a significant symbol.

use tracing::debug;

use crate::types::{
    DiscoveryError, EnumeratorConfig, PatternSet, Result, SymbolSequence, has_significant,
};
use crate::WILDCARD;

/// Mask enumerator
#[derive(Debug, Default)]
pub struct MaskEnumerator {
    config: EnumeratorConfig,
}

impl MaskEnumerator {
    /// Create enumerator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create enumerator with explicit settings
    pub fn with_config(config: EnumeratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    /// Enumerate all masks of `sequence` into a pattern set
    pub fn enumerate(&self, sequence: &SymbolSequence) -> Result<PatternSet> {
        let n = sequence.len();
        if n > self.config.max_sequence_length {
            return Err(DiscoveryError::InvalidInputLength {
                length: n,
                max: self.config.max_sequence_length,
            });
        }

        let mut set = PatternSet::new();
        if n == 0 {
            return Ok(set);
        }

        let symbols: Vec<char> = sequence.symbols().iter().map(|s| s.as_char()).collect();
        let total: u64 = 1 << n;
        let mut masked = String::with_capacity(n);

        for mask in 0..total {
            masked.clear();
            masked.extend(symbols.iter().enumerate().map(|(i, &c)| {
                if mask & (1 << (n - 1 - i)) != 0 {
                    WILDCARD
                } else {
                    c
                }
            }));

            if self.config.emit_raw {
                set.insert(masked.as_str());
            }

            let canonical = isolate_run_lengths(&collapse_wildcards(&masked));
            if has_significant(&canonical) {
                set.insert(canonical);
            }
        }

        debug!(
            sequence = %sequence,
            masks = total,
            patterns = set.len(),
            emit_raw = self.config.emit_raw,
            "enumerated masks"
        );
        Ok(set)
    }
}

/// Replace every maximal run of wildcards by its decimal length
pub fn collapse_wildcards(masked: &str) -> String {
    let mut out = String::with_capacity(masked.len());
    let mut run = 0usize;
    for c in masked.chars() {
        if c == WILDCARD {
            run += 1;
        } else {
            if run > 0 {
                out.push_str(&run.to_string());
                run = 0;
            }
            out.push(c);
        }
    }
    if run > 0 {
        out.push_str(&run.to_string());
    }
    out
}

/// Drop every digit that sits at an edge, touches another digit, or is zero.
/// Works per character, so run lengths of 10 or more never survive.
pub fn isolate_run_lengths(encoded: &str) -> String {
    let chars: Vec<char> = encoded.chars().collect();
    let last = chars.len().saturating_sub(1);
    chars
        .iter()
        .enumerate()
        .filter(|&(j, &c)| {
            if !c.is_ascii_digit() {
                return true;
            }
            c != '0'
                && j > 0
                && j < last
                && !chars[j - 1].is_ascii_digit()
                && !chars[j + 1].is_ascii_digit()
        })
        .map(|(_, &c)| c)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
