use std::fmt;
use thiserror::Error;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
///
/// The inner `u8` is the original byte that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl std::error::Error for InvalidNucleotide {}

/// Error type for failures when parsing or constructing a `Strand`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStrand {
    /// A character was not recognized as a valid nucleotide.
    #[error("Invalid character in strand at position {position}: '{found}'")]
    InvalidChar { position: usize, found: char },

    /// The strand was empty when a non-empty strand was required.
    #[error("Empty strand not allowed")]
    Empty,
}

/// Error returned when an index is outside the valid range for a strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} out of bounds (len = {len})")]
pub struct OutOfBounds {
    /// The index that was requested
    pub index: usize,

    /// The current length of the strand (upper bound)
    pub len: usize,
}

/// Errors raised when two specimens cannot be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpecimenError {
    /// Strands have different lengths
    #[error("Strand length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Both strands are empty, so there is nothing to compare
    #[error("Cannot compare empty strands")]
    EmptyStrand,
}

/// Errors that can occur while generating a population.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopulationError {
    /// The population configuration is not usable
    #[error("Invalid population configuration: {0}")]
    InvalidConfig(String),

    /// The attempt cap was reached before enough specimens survived
    #[error(
        "Gave up after {attempts} candidates: {accepted} of {target} specimens survived"
    )]
    Exhausted {
        attempts: usize,
        accepted: usize,
        target: usize,
    },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] PopulationError),
}
