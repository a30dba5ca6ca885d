//! Simulation configuration.
//!
//! `Configuration` is the master struct: it can be read from a JSON file to
//! reproduce a run exactly (given a seed) and written back out. Missing fields
//! fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base::DEFAULT_STRAND_LENGTH;
use crate::errors::{ConfigError, PopulationError};
use crate::evolution::{SurvivalCriterion, DEFAULT_SURVIVAL_THRESHOLD};

/// Number of surviving specimens collected by default.
pub const DEFAULT_TARGET_COUNT: usize = 30;

/// The master configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub population: PopulationConfig,
}

impl Configuration {
    pub fn new(population: PopulationConfig, seed: Option<u64>) -> Self {
        Self { seed, population }
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), PopulationError> {
        self.population.validate()
    }
}

/// Parameters of the population generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of surviving specimens to collect
    pub target_count: usize,
    /// Length of every generated strand
    pub strand_length: usize,
    /// Minimum rounded GC percentage for a candidate to be kept
    pub survival_threshold: u8,
    /// Cap on candidates drawn; `None` retries until the target is met
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<usize>,
}

impl PopulationConfig {
    pub fn new(target_count: usize) -> Self {
        Self {
            target_count,
            ..Self::default()
        }
    }

    pub fn with_strand_length(mut self, strand_length: usize) -> Self {
        self.strand_length = strand_length;
        self
    }

    pub fn with_survival_threshold(mut self, threshold: u8) -> Self {
        self.survival_threshold = threshold;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Survival criterion built from `survival_threshold`.
    pub fn survival_criterion(&self) -> Result<SurvivalCriterion, PopulationError> {
        SurvivalCriterion::new(self.survival_threshold)
    }

    /// Check the parameters.
    ///
    /// A positive strand length and a threshold of at most 100% keep the
    /// threshold reachable by some strand, so unbounded generation ends
    /// almost surely.
    pub fn validate(&self) -> Result<(), PopulationError> {
        if self.strand_length == 0 {
            return Err(PopulationError::InvalidConfig(
                "strand length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == Some(0) && self.target_count > 0 {
            return Err(PopulationError::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }
        self.survival_criterion()?;
        Ok(())
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            strand_length: DEFAULT_STRAND_LENGTH,
            survival_threshold: DEFAULT_SURVIVAL_THRESHOLD,
            max_attempts: None,
        }
    }
}
