//! Core types for motif discovery

mod error;
mod sequence;
mod pattern;
mod config;
mod report;

pub use error::{DiscoveryError, Result};
pub use sequence::{Symbol, SymbolSequence, is_significant, has_significant};
pub use pattern::{PatternSet, PatternKind, ReconciledPattern, ScoredPattern};
pub use config::{EnumeratorConfig, DiscoveryConfig};
pub use report::DiscoveryReport;
