use anyhow::{Context, Result};

use aequor_sim::simulation::{Configuration, Simulation};

use crate::utils::parse_strand;

pub fn mutate_strand(config: Configuration, text: &str, rounds: usize) -> Result<()> {
    let mut strand = parse_strand(text)?;
    if strand.is_empty() {
        anyhow::bail!("Cannot mutate an empty strand");
    }

    let mut sim = Simulation::new(config).context("Invalid configuration")?;

    println!("0\t{strand}");
    for round in 1..=rounds {
        // Non-empty strands always yield a mutation
        if let Some(change) = sim.mutate_strand(&mut strand) {
            println!(
                "{round}\t{strand}\t{}: {} -> {}",
                change.position, change.from, change.to
            );
        }
    }

    Ok(())
}
