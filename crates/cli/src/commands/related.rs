use anyhow::{Context, Result};

use aequor_sim::analysis::{ComparisonReporter, SilentReporter, StdoutReporter};
use aequor_sim::simulation::{Configuration, Simulation};

use crate::printing::print_parameters;

pub fn find_related(config: Configuration, quiet: bool) -> Result<()> {
    let mut sim = Simulation::new(config).context("Invalid configuration")?;
    if !quiet {
        print_parameters(sim.configuration());
    }

    let population = sim
        .generate_population()
        .context("Failed to generate population")?;

    let mut reporter: Box<dyn ComparisonReporter> = if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(StdoutReporter)
    };

    let pair = population
        .most_related(&mut *reporter)
        .context("Failed to compare specimens")?;

    match pair {
        Some(pair) => {
            if !quiet {
                println!("\n🔗 Most Related Pair");
            }
            println!(
                "Specimen #{} and Specimen #{} ({} DNA in common)",
                pair.first.id(),
                pair.second.id(),
                pair.percentage
            );
            if !quiet {
                println!("  #{}: {}", pair.first.id(), pair.first.strand());
                println!("  #{}: {}", pair.second.id(), pair.second.strand());
            }
        }
        None => println!("Need at least 2 specimens to find a related pair."),
    }

    Ok(())
}
