use anyhow::{Context, Result};
use std::path::PathBuf;

use aequor_sim::simulation::{Configuration, Simulation};

use crate::printing::{format_population_fasta, format_population_text, print_parameters};

pub fn generate_population(
    config: Configuration,
    format: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    // Validate the format before doing any work
    if !matches!(format, "text" | "json" | "fasta") {
        anyhow::bail!("Unknown format '{format}'. Use: text, json, or fasta");
    }

    let mut sim = Simulation::new(config).context("Invalid configuration")?;
    let population = sim
        .generate_population()
        .context("Failed to generate population")?;

    let content = match format {
        "json" => serde_json::to_string_pretty(&population)?,
        "fasta" => format_population_fasta(&population),
        _ => format_population_text(&population),
    };

    if let Some(path) = output {
        print_parameters(sim.configuration());
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "✓ {} specimens written to: {}",
            population.size(),
            path.display()
        );
    } else {
        print!("{content}");
        if format == "json" {
            println!();
        }
    }

    Ok(())
}
