use anyhow::{Context, Result};
use std::path::Path;

use aequor_sim::simulation::Configuration;
use aequor_sim::Strand;

use crate::args::PopulationArgs;

/// Build the effective configuration: file (or defaults), then `--seed`,
/// then population flags.
pub fn load_configuration(
    path: Option<&Path>,
    seed: Option<u64>,
    population: &PopulationArgs,
) -> Result<Configuration> {
    let mut config = match path {
        Some(path) => Configuration::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Configuration::default(),
    };

    if seed.is_some() {
        config.seed = seed;
    }
    population.apply(&mut config.population);
    config.validate().context("Invalid population parameters")?;

    log::debug!("Effective configuration: {config:?}");
    Ok(config)
}

pub fn parse_strand(text: &str) -> Result<Strand> {
    text.trim()
        .parse::<Strand>()
        .with_context(|| format!("'{text}' is not a DNA strand"))
}
