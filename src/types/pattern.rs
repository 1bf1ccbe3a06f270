//! Pattern sets, reconciled patterns and scored patterns

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Deduplicated collection of pattern strings from one sequence.
///
/// Iteration follows first-insertion order. The enumerator inserts in mask
/// order, so reconciliation over two sets is fully deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pattern; returns false if it was already present
    pub fn insert(&mut self, pattern: impl Into<String>) -> bool {
        let pattern = pattern.into();
        if self.seen.contains(&pattern) {
            return false;
        }
        self.seen.insert(pattern.clone());
        self.order.push(pattern);
        true
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.seen.contains(pattern)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PatternSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for pattern in iter {
            set.insert(pattern);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

/// How a reconciled pattern was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternKind {
    /// Same canonical string present in both sets
    Identical,
    /// Same skeleton, aligned position by position
    Aligned,
}

impl PatternKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Identical => "IDENTICAL",
            Self::Aligned => "ALIGNED",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Identical => "Shared verbatim by both sequences",
            Self::Aligned => "Shared skeleton with differing gaps",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One reconciler output with its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledPattern {
    pub text: String,
    pub kind: PatternKind,
}

impl ReconciledPattern {
    pub fn new(text: String, kind: PatternKind) -> Self {
        Self { text, kind }
    }
}

/// A ranked pattern with its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPattern {
    pub pattern: String,
    pub score: u64,
}

impl ScoredPattern {
    pub fn new(pattern: impl Into<String>, score: u64) -> Self {
        Self {
            pattern: pattern.into(),
            score,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_set_keeps_first_insertion_order() {
        let mut set = PatternSet::new();
        assert!(set.insert("Ab"));
        assert!(set.insert("A1"));
        assert!(!set.insert("Ab"));
        let items: Vec<&str> = set.iter().collect();
        assert_eq!(items, vec!["Ab", "A1"]);
    }

    #[test]
    fn test_pattern_set_from_iter_dedups() {
        let set: PatternSet = ["A", "B", "A"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("B"));
        assert!(!set.contains("C"));
    }

    #[test]
    fn test_kind_serializes_screaming() {
        let json = serde_json::to_string(&PatternKind::Aligned).unwrap();
        assert_eq!(json, "\"ALIGNED\"");
    }
}
