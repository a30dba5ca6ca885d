//! Survivability screening.
//!
//! A specimen is considered likely to survive when the GC content of its
//! strand reaches a threshold. The GC percentage is rounded to a whole number
//! before the comparison, so 59.6% counts as 60%.

use serde::{Deserialize, Serialize};

use crate::analysis::composition::gc_content;
use crate::base::{Percentage, Strand};
use crate::errors::PopulationError;

/// Default minimum GC content for survival.
pub const DEFAULT_SURVIVAL_THRESHOLD: u8 = 60;

/// GC-content threshold a strand must reach to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalCriterion {
    min_gc: Percentage,
}

impl SurvivalCriterion {
    /// Create a criterion from a whole-number threshold in `0..=100`.
    pub fn new(threshold: u8) -> Result<Self, PopulationError> {
        Percentage::new(threshold)
            .map(|min_gc| Self { min_gc })
            .ok_or_else(|| {
                PopulationError::InvalidConfig(format!(
                    "survival threshold must be between 0 and 100, got {threshold}"
                ))
            })
    }

    #[inline]
    pub fn threshold(&self) -> Percentage {
        self.min_gc
    }

    /// Return true if the rounded GC content of `strand` meets the threshold.
    #[inline]
    pub fn survives(&self, strand: &Strand) -> bool {
        gc_content(strand) >= self.min_gc
    }
}

impl Default for SurvivalCriterion {
    fn default() -> Self {
        let min_gc = match Percentage::new(DEFAULT_SURVIVAL_THRESHOLD) {
            Some(p) => p,
            None => Percentage::FULL,
        };
        Self { min_gc }
    }
}
