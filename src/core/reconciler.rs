//! Pattern Reconciler: agreement between two pattern sets
//!
//! Every pattern of the first set is matched against the second set:
//! - present verbatim → Identical-Format (`A1bC` → `A-x(1)-b-C`)
//! - same skeleton (digits stripped) → Aligned-Format of the pair,
//!   walked position by position up to the shorter length
//!
//! Output is not deduplicated; the same string may come from several pairs.

use tracing::debug;

use crate::types::{PatternKind, PatternSet, ReconciledPattern, has_significant};
use crate::TOKEN_SEPARATOR;

/// Pattern reconciler
#[derive(Debug, Default)]
pub struct PatternReconciler;

impl PatternReconciler {
    /// Create new reconciler
    pub fn new() -> Self {
        Self
    }

    /// Reconcile two sets into pattern strings
    pub fn reconcile(&self, set_a: &PatternSet, set_b: &PatternSet) -> Vec<String> {
        self.reconcile_detailed(set_a, set_b)
            .into_iter()
            .map(|p| p.text)
            .collect()
    }

    /// Reconcile two sets, keeping the origin of every pattern
    pub fn reconcile_detailed(&self, set_a: &PatternSet, set_b: &PatternSet) -> Vec<ReconciledPattern> {
        let mut out = Vec::new();

        // Skeletons of B are reused for every element of A
        let skeletons_b: Vec<(&str, String)> = set_b.iter().map(|b| (b, skeleton(b))).collect();

        for a in set_a {
            if set_b.contains(a) {
                let formatted = format_identical(a);
                if has_significant(&formatted) {
                    out.push(ReconciledPattern::new(formatted, PatternKind::Identical));
                }
                continue;
            }

            let skeleton_a = skeleton(a);
            for (b, skeleton_b) in &skeletons_b {
                if *skeleton_b != skeleton_a {
                    continue;
                }
                let formatted = format_aligned(a, b);
                if has_significant(&formatted) {
                    out.push(ReconciledPattern::new(formatted, PatternKind::Aligned));
                }
            }
        }

        debug!(
            set_a = set_a.len(),
            set_b = set_b.len(),
            reconciled = out.len(),
            "reconciled pattern sets"
        );
        out
    }
}

/// Symbols only: every digit removed
pub fn skeleton(pattern: &str) -> String {
    pattern.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Letters become tokens, every digit becomes `x(d)`
pub fn format_identical(pattern: &str) -> String {
    let mut builder = PatternBuilder::default();
    for c in pattern.chars() {
        if c.is_alphabetic() {
            builder.symbol(c);
        } else if c.is_ascii_digit() {
            builder.gap(c);
        }
    }
    builder.finish()
}

/// Position-by-position alignment of two patterns with the same skeleton
pub fn format_aligned(a: &str, b: &str) -> String {
    let mut builder = PatternBuilder::default();
    // Consecutive positions that disagree
    let mut mismatch = 0usize;

    for (c1, c2) in a.chars().zip(b.chars()) {
        if c1.is_alphabetic() && c2.is_alphabetic() {
            if c1 == c2 {
                builder.flush(&mut mismatch);
                builder.symbol(c1);
            } else {
                mismatch += 1;
            }
        } else if c1.is_ascii_digit() && c2.is_ascii_digit() {
            if c1 == c2 {
                builder.flush(&mut mismatch);
                builder.gap(c1);
            } else {
                // The pending mismatch run carries over past a range token
                let (d1, d2) = (digit_value(c1), digit_value(c2));
                builder.range(d1.min(d2), d1.max(d2));
            }
        } else {
            mismatch += 1;
        }
    }
    builder.flush(&mut mismatch);

    builder.finish()
}

fn digit_value(c: char) -> u32 {
    c.to_digit(10).unwrap_or(0)
}

/// Hyphen-joined token accumulator
#[derive(Debug, Default)]
struct PatternBuilder {
    out: String,
}

impl PatternBuilder {
    fn push(&mut self, token: &str) {
        if !self.out.is_empty() {
            self.out.push(TOKEN_SEPARATOR);
        }
        self.out.push_str(token);
    }

    fn symbol(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.push(c.encode_utf8(&mut buf));
    }

    fn gap(&mut self, digit: char) {
        self.push(&format!("x({})", digit));
    }

    fn range(&mut self, lo: u32, hi: u32) {
        self.push(&format!("x({},{})", lo, hi));
    }

    /// Emit a pending mismatch run as `x(count)` and reset it
    fn flush(&mut self, mismatch: &mut usize) {
        if *mismatch > 0 {
            self.push(&format!("x({})", mismatch));
            *mismatch = 0;
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

// =============================================================================
// TESTS
// =============================================================================
