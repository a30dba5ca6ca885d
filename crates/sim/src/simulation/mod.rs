//! Simulation engine, configuration and population management.
//!
//! - `Simulation`: owns the configuration and a seeded RNG.
//! - `Population`: ordered collection of specimens.
//! - `Configuration` / `PopulationConfig`: serde-backed parameters.

pub mod configs;
pub mod engine;
pub mod population;

pub use configs::{Configuration, PopulationConfig, DEFAULT_TARGET_COUNT};
pub use engine::Simulation;
pub use population::{generate_population, Population};
