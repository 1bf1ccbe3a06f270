//! Core engines for motif discovery

pub mod enumerator;
pub mod reconciler;
pub mod scorer;
pub mod pipeline;

pub use enumerator::{MaskEnumerator, collapse_wildcards, isolate_run_lengths};
pub use reconciler::{PatternReconciler, format_identical, format_aligned, skeleton};
pub use scorer::PatternScorer;
pub use pipeline::Discovery;
