//! Run configuration

use serde::{Deserialize, Serialize};

use crate::types::{DiscoveryError, Result};
use crate::{DEFAULT_MAX_SEQUENCE_LENGTH, HARD_MAX_SEQUENCE_LENGTH};

/// Mask enumerator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratorConfig {
    /// Longest sequence the enumerator will accept
    pub max_sequence_length: usize,
    /// Also keep every raw masked sequence (wildcards un-collapsed)
    pub emit_raw: bool,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
            emit_raw: true,
        }
    }
}

impl EnumeratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_sequence_length > HARD_MAX_SEQUENCE_LENGTH {
            return Err(DiscoveryError::InvalidConfig {
                reason: format!(
                    "max_sequence_length {} is above the hard limit of {}",
                    self.max_sequence_length, HARD_MAX_SEQUENCE_LENGTH
                ),
            });
        }
        Ok(())
    }
}

/// Full pipeline settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub enumerator: EnumeratorConfig,
    /// Drop repeated reconciled patterns, keeping the first occurrence
    pub unique_patterns: bool,
    /// Keep only the N best-ranked patterns
    pub top: Option<usize>,
}

impl DiscoveryConfig {
    pub fn validate(&self) -> Result<()> {
        self.enumerator.validate()
    }
}
