use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Nucleotide;
use crate::errors::{InvalidStrand, OutOfBounds};

/// Length of strands produced by the generators unless told otherwise.
pub const DEFAULT_STRAND_LENGTH: usize = 15;

/// A single DNA strand backed by a vector of `Nucleotide`s.
///
/// Every element is a valid base by construction, so operations over a
/// `Strand` never have to deal with unknown symbols. Serializes as its
/// textual form (e.g. `"ATCG"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Strand(Vec<Nucleotide>);

impl Strand {
    /// Create a new, empty `Strand`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Build a strand of `length` uniformly drawn bases.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Self {
        (0..length).map(|_| Nucleotide::random(rng)).collect()
    }

    /// Return the length of the strand in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Set the base at `index` to `base`.
    ///
    /// Returns `OutOfBounds` if `index` is greater than or equal to the
    /// strand length.
    #[inline]
    pub fn set(&mut self, index: usize, base: Nucleotide) -> Result<(), OutOfBounds> {
        let len = self.len();
        self.0
            .get_mut(index)
            .map(|slot| *slot = base)
            .ok_or(OutOfBounds { index, len })
    }

    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    #[inline]
    pub fn push(&mut self, base: Nucleotide) {
        self.0.push(base);
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }

    /// Count the positions whose bases agree with `other`.
    ///
    /// Only the overlapping prefix is inspected; callers that care about
    /// length agreement check it first.
    pub fn matches(&self, other: &Strand) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a == b)
            .count()
    }

    /// Count C and G bases.
    pub fn gc_count(&self) -> usize {
        self.0.iter().filter(|nuc| nuc.is_gc()).count()
    }

    /// Build the complementary strand (A <-> T, C <-> G). `self` is untouched.
    pub fn complement(&self) -> Strand {
        self.0.iter().map(|nuc| nuc.complement()).collect()
    }
}

impl FromIterator<Nucleotide> for Strand {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[Nucleotide]> for Strand {
    fn as_ref(&self) -> &[Nucleotide] {
        &self.0
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Strand {
    type Err = InvalidStrand;

    /// Parse a textual strand (e.g. "ATCG"), case-insensitively.
    ///
    /// The first character outside the DNA alphabet is reported with its
    /// position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                Nucleotide::try_from(c)
                    .map_err(|_| InvalidStrand::InvalidChar { position, found: c })
            })
            .collect()
    }
}

impl TryFrom<String> for Strand {
    type Error = InvalidStrand;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Strand> for String {
    fn from(strand: Strand) -> String {
        strand.to_string()
    }
}
