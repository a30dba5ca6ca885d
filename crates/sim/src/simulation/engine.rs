//! Simulation engine.
//!
//! `Simulation` pairs a validated configuration with its own random number
//! generator, so a run with a fixed seed is fully reproducible.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::base::{generate_strand, Strand};
use crate::errors::PopulationError;
use crate::evolution::{point_mutation, PointMutation};
use crate::genome::Specimen;
use crate::simulation::{Configuration, Population};

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Simulation configuration
    config: Configuration,
    /// Random number generator (using Xoshiro256++ for better performance)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation, seeding the RNG from `config.seed` or from the
    /// thread RNG when no seed is set.
    pub fn new(config: Configuration) -> Result<Self, PopulationError> {
        config.validate()?;

        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        Ok(Self { config, rng })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Generate a population of surviving specimens.
    pub fn generate_population(&mut self) -> Result<Population, PopulationError> {
        Population::generate(&self.config.population, &mut self.rng)
    }

    /// Draw a strand of the configured length.
    pub fn random_strand(&mut self) -> Strand {
        generate_strand(&mut self.rng, self.config.population.strand_length)
    }

    /// Apply one point mutation to `specimen`.
    pub fn mutate(&mut self, specimen: &mut Specimen) {
        specimen.mutate(&mut self.rng);
    }

    /// Apply one point mutation to `strand`, returning the change.
    pub fn mutate_strand(&mut self, strand: &mut Strand) -> Option<PointMutation> {
        point_mutation(strand, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::PopulationConfig;

    #[test]
    fn test_same_seed_same_population() {
        let config = Configuration::new(PopulationConfig::new(10), Some(42));
        let mut sim1 = Simulation::new(config.clone()).unwrap();
        let mut sim2 = Simulation::new(config).unwrap();

        assert_eq!(
            sim1.generate_population().unwrap(),
            sim2.generate_population().unwrap()
        );
    }

    #[test]
    fn test_different_seed_different_population() {
        let mut sim1 =
            Simulation::new(Configuration::new(PopulationConfig::new(10), Some(1))).unwrap();
        let mut sim2 =
            Simulation::new(Configuration::new(PopulationConfig::new(10), Some(2))).unwrap();

        assert_ne!(
            sim1.generate_population().unwrap(),
            sim2.generate_population().unwrap()
        );
    }

    #[test]
    fn test_unseeded_simulation_runs() {
        let mut sim = Simulation::new(Configuration::default()).unwrap();
        assert_eq!(sim.generate_population().unwrap().size(), 30);
        assert_eq!(sim.random_strand().len(), 15);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let config = Configuration::new(PopulationConfig::default().with_strand_length(0), None);
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_mutate_through_engine() {
        let mut sim = Simulation::new(Configuration::new(PopulationConfig::default(), Some(5)))
            .unwrap();
        let strand = sim.random_strand();
        let mut specimen = Specimen::new(1, strand.clone());

        sim.mutate(&mut specimen);
        assert_eq!(strand.matches(specimen.strand()), strand.len() - 1);

        let mut copy = strand.clone();
        let change = sim.mutate_strand(&mut copy).unwrap();
        assert_eq!(copy.get(change.position), Some(change.to));
    }
}
