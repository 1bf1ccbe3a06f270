//! Error type for the discovery pipeline

/// Everything that can go wrong before or during enumeration.
/// Reconciliation and scoring never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryError {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("sequence length {length} exceeds the configured maximum of {max}")]
    InvalidInputLength { length: usize, max: usize },

    #[error("invalid symbol {symbol:?} at position {position}: only letters are allowed")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
