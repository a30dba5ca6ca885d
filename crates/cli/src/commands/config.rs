use anyhow::{Context, Result};

use aequor_sim::simulation::Configuration;

pub fn show_configuration(config: &Configuration) -> Result<()> {
    let json = config.to_json().context("Failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}
