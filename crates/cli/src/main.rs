mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::PopulationArgs;
use commands::{complement, config, generate, mutate, related};

/// Aequor: random DNA specimens
///
/// Generates specimens carrying random DNA strands, keeps the ones whose GC
/// content suggests they will survive, and finds the most related pair.
#[derive(Parser, Debug)]
#[command(name = "aequor")]
#[command(author, version, about = "Generates, mutates and compares random DNA specimens", long_about = None)]
struct Cli {
    /// Random seed (overrides the configuration file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a population of specimens likely to survive.
    Generate {
        #[command(flatten)]
        population: PopulationArgs,

        /// Output format (text, json, fasta)
        #[arg(short, long, default_value = defaults::FORMAT)]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a population and find its most related pair.
    ///
    /// Every pairwise comparison is printed before the result.
    Related {
        #[command(flatten)]
        population: PopulationArgs,

        /// Only print the most related pair
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the complementary strand (A<->T, C<->G).
    Complement {
        /// Strand to complement, e.g. ATCGAC
        strand: String,
    },

    /// Apply random point mutations to a strand.
    Mutate {
        /// Strand to mutate, e.g. ATCGAC
        strand: String,

        /// Number of successive point mutations
        #[arg(short, long, default_value_t = defaults::MUTATION_ROUNDS)]
        rounds: usize,
    },

    /// Show the effective configuration as JSON.
    ShowConfig {
        #[command(flatten)]
        population: PopulationArgs,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(defaults::LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Generate {
            population,
            format,
            output,
        } => {
            let config = utils::load_configuration(config_path, cli.seed, &population)?;
            generate::generate_population(config, &format, output.as_ref())?;
        }
        Commands::Related { population, quiet } => {
            let config = utils::load_configuration(config_path, cli.seed, &population)?;
            related::find_related(config, quiet)?;
        }
        Commands::Complement { strand } => {
            complement::complement_strand(&strand)?;
        }
        Commands::Mutate { strand, rounds } => {
            let config =
                utils::load_configuration(config_path, cli.seed, &PopulationArgs::default())?;
            mutate::mutate_strand(config, &strand, rounds)?;
        }
        Commands::ShowConfig { population } => {
            let config = utils::load_configuration(config_path, cli.seed, &population)?;
            config::show_configuration(&config)?;
        }
    }

    Ok(())
}
