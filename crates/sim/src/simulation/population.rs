//! Population generation and management.
//!
//! A population is an ordered collection of specimens. The generator keeps
//! drawing random candidates and accepts only those that pass the survival
//! criterion, numbering accepted specimens 1, 2, 3, ... in acceptance order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::relatedness::{find_most_related, ComparisonReporter, RelatedPair};
use crate::base::generate_strand;
use crate::errors::{PopulationError, SpecimenError};
use crate::genome::Specimen;
use crate::simulation::PopulationConfig;

/// An ordered collection of specimens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Population {
    specimens: Vec<Specimen>,
}

impl Population {
    pub fn new(specimens: Vec<Specimen>) -> Self {
        Self { specimens }
    }

    /// Generate a population of surviving specimens.
    ///
    /// See [`generate_population`].
    pub fn generate<R: Rng + ?Sized>(
        config: &PopulationConfig,
        rng: &mut R,
    ) -> Result<Self, PopulationError> {
        generate_population(config, rng)
    }

    /// Get the number of specimens in the population.
    pub fn size(&self) -> usize {
        self.specimens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specimens.is_empty()
    }

    pub fn specimens(&self) -> &[Specimen] {
        &self.specimens
    }

    /// Get mutable access to specimens.
    pub fn specimens_mut(&mut self) -> &mut [Specimen] {
        &mut self.specimens
    }

    pub fn get(&self, index: usize) -> Option<&Specimen> {
        self.specimens.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Specimen> {
        self.specimens.get_mut(index)
    }

    /// Look a specimen up by its id.
    pub fn find(&self, id: u32) -> Option<&Specimen> {
        self.specimens.iter().find(|s| s.id() == id)
    }

    pub fn push(&mut self, specimen: Specimen) {
        self.specimens.push(specimen);
    }

    pub fn into_specimens(self) -> Vec<Specimen> {
        self.specimens
    }

    /// Find the most related pair, reporting every comparison.
    ///
    /// See [`find_most_related`].
    pub fn most_related<R: ComparisonReporter + ?Sized>(
        &self,
        reporter: &mut R,
    ) -> Result<Option<RelatedPair<'_>>, SpecimenError> {
        find_most_related(&self.specimens, reporter)
    }
}

impl From<Vec<Specimen>> for Population {
    fn from(specimens: Vec<Specimen>) -> Self {
        Self::new(specimens)
    }
}

/// Collect `config.target_count` specimens that are likely to survive.
///
/// Each candidate gets a fresh random strand of `config.strand_length` bases
/// and the next id. Rejected candidates are discarded without consuming the
/// id, so accepted ids run 1..=target_count in acceptance order.
///
/// Without `max_attempts` the loop runs until the target is met; a valid
/// configuration guarantees this happens almost surely.
///
/// # Errors
///
/// - `InvalidConfig` if the configuration fails validation.
/// - `Exhausted` if `max_attempts` candidates were drawn before the target
///   was reached.
pub fn generate_population<R: Rng + ?Sized>(
    config: &PopulationConfig,
    rng: &mut R,
) -> Result<Population, PopulationError> {
    config.validate()?;
    let criterion = config.survival_criterion()?;

    let mut specimens = Vec::with_capacity(config.target_count);
    let mut next_id: u32 = 1;
    let mut attempts: usize = 0;

    while specimens.len() < config.target_count {
        if let Some(max) = config.max_attempts {
            if attempts >= max {
                log::warn!(
                    "Stopped after {attempts} candidates with {} of {} specimens",
                    specimens.len(),
                    config.target_count
                );
                return Err(PopulationError::Exhausted {
                    attempts,
                    accepted: specimens.len(),
                    target: config.target_count,
                });
            }
        }
        attempts += 1;

        let candidate = Specimen::new(next_id, generate_strand(rng, config.strand_length));
        if candidate.survives(&criterion) {
            specimens.push(candidate);
            next_id += 1;
        } else {
            log::trace!(
                "Rejected candidate for #{next_id} with {} GC",
                candidate.gc_content()
            );
        }
    }

    log::info!(
        "Generated {} specimens from {attempts} candidates",
        specimens.len()
    );
    Ok(Population::new(specimens))
}
