//! Pairwise relatedness between specimens.
//!
//! Similarity is the rounded percentage of positions at which two strands
//! carry the same base. Computing it is pure; reporting a comparison is a
//! separate step routed through a [`ComparisonReporter`], so callers decide
//! whether the report line goes to stdout, into a buffer, or nowhere.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::{Percentage, Strand};
use crate::errors::SpecimenError;
use crate::genome::Specimen;

/// Positionwise similarity of two equal-length strands.
///
/// # Errors
///
/// - `LengthMismatch` if the strands differ in length (no truncation).
/// - `EmptyStrand` if both strands are empty.
pub fn similarity(left: &Strand, right: &Strand) -> Result<Percentage, SpecimenError> {
    if left.len() != right.len() {
        return Err(SpecimenError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    if left.is_empty() {
        return Err(SpecimenError::EmptyStrand);
    }
    Ok(Percentage::round_ratio(left.matches(right), left.len()))
}

/// Outcome of comparing two specimens, identified by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub left: u32,
    pub right: u32,
    pub percentage: Percentage,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Specimen #{} and Specimen #{} have {} DNA in common.",
            self.left, self.right, self.percentage
        )
    }
}

/// Sink for comparison reports.
pub trait ComparisonReporter {
    fn report(&mut self, comparison: &Comparison);
}

impl<R: ComparisonReporter + ?Sized> ComparisonReporter for &mut R {
    fn report(&mut self, comparison: &Comparison) {
        (**self).report(comparison);
    }
}

/// Prints every comparison as one line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl ComparisonReporter for StdoutReporter {
    fn report(&mut self, comparison: &Comparison) {
        println!("{comparison}");
    }
}

/// Discards every comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ComparisonReporter for SilentReporter {
    fn report(&mut self, _comparison: &Comparison) {}
}

impl ComparisonReporter for Vec<Comparison> {
    fn report(&mut self, comparison: &Comparison) {
        self.push(*comparison);
    }
}

/// The most similar pair found in a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedPair<'a> {
    pub first: &'a Specimen,
    pub second: &'a Specimen,
    pub percentage: Percentage,
}

impl RelatedPair<'_> {
    pub fn ids(&self) -> (u32, u32) {
        (self.first.id(), self.second.id())
    }
}

/// Find the pair of specimens with the highest similarity.
///
/// Every unordered pair `(i, j)` with `i < j` is compared in population
/// order and each comparison is handed to `reporter`. Ties keep the first
/// pair encountered. Returns `Ok(None)` when fewer than two specimens are
/// given; with two or more a pair is always returned.
///
/// # Errors
///
/// Propagates the first [`SpecimenError`] raised by a comparison, e.g. when
/// strands have different lengths.
pub fn find_most_related<'a, R: ComparisonReporter + ?Sized>(
    specimens: &'a [Specimen],
    reporter: &mut R,
) -> Result<Option<RelatedPair<'a>>, SpecimenError> {
    let mut best: Option<RelatedPair<'a>> = None;

    for (i, first) in specimens.iter().enumerate() {
        for second in &specimens[i + 1..] {
            let percentage = first.compare(second, reporter)?;
            let improves = match &best {
                Some(current) => percentage > current.percentage,
                None => true,
            };
            if improves {
                best = Some(RelatedPair {
                    first,
                    second,
                    percentage,
                });
            }
        }
    }

    match &best {
        Some(pair) => log::debug!(
            "Most related: #{} and #{} at {}",
            pair.first.id(),
            pair.second.id(),
            pair.percentage
        ),
        None => log::debug!(
            "Population of {} specimen(s) has no pairs to compare",
            specimens.len()
        ),
    }

    Ok(best)
}
