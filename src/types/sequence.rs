//! Input sequences and their symbols

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{DiscoveryError, Result};
use crate::WILDCARD;

/// A single input symbol. Upper case marks a significant symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    /// Wrap a letter; anything else is rejected
    pub fn new(c: char, position: usize) -> Result<Self> {
        if c.is_alphabetic() {
            Ok(Self(c))
        } else {
            Err(DiscoveryError::InvalidSymbol { symbol: c, position })
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_significant(&self) -> bool {
        is_significant(self.0)
    }
}

/// Significant symbols are the upper case letters
pub fn is_significant(c: char) -> bool {
    c.is_uppercase()
}

/// True if any character of `s` is a significant symbol
pub fn has_significant(s: &str) -> bool {
    s.chars().any(is_significant)
}

/// Immutable ordered sequence of symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSequence {
    symbols: Vec<Symbol>,
}

impl SymbolSequence {
    /// Parse a sequence from text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let symbols = text
            .trim()
            .chars()
            .enumerate()
            .map(|(position, c)| Symbol::new(c, position))
            .collect::<Result<Vec<_>>>()?;

        if symbols.iter().any(|s| s.as_char() == WILDCARD) {
            // Same ambiguity as the notation itself: an input 'x' collapses like a wildcard
            warn!(sequence = text.trim(), "input contains the wildcard marker '{}'", WILDCARD);
        }

        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of significant symbols
    pub fn significant_count(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_significant()).count()
    }
}

impl std::fmt::Display for SymbolSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for SymbolSequence {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// =============================================================================
// TESTS
// =============================================================================
