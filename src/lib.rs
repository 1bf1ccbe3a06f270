//! Motif discovery between two symbol sequences
//!
//! Pipeline: enumerate → enumerate → reconcile → score → rank

pub mod core;
pub mod types;

pub use types::{DiscoveryError, Result};

// =============================================================================
// NOTATION
// =============================================================================

/// Marker substituted at every masked position
pub const WILDCARD: char = 'x';

/// Separator between tokens of a reconciled pattern
pub const TOKEN_SEPARATOR: char = '-';

// =============================================================================
// LIMITS
// =============================================================================

/// Default maximum sequence length accepted by the enumerator.
/// Enumeration is 2^n, so 20 already means ~1M masks per sequence.
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 20;

/// Hard ceiling for any configured maximum (masks are held in a u64)
pub const HARD_MAX_SEQUENCE_LENGTH: usize = 32;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
