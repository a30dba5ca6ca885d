//! Default values for command line options that have no library counterpart.
//! Population defaults live in `aequor_sim::simulation::PopulationConfig`.

pub const FORMAT: &str = "text";
pub const MUTATION_ROUNDS: usize = 1;

/// Log filter used when `RUST_LOG` is not set.
pub const LOG_FILTER: &str = "warn";
