//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use aequor_sim::prelude::*;
//! use std::str::FromStr;
//!
//! let specimen = Specimen::new(1, Strand::from_str("ATCGAC").unwrap());
//! assert_eq!(specimen.complement_strand().to_string(), "TAGCTG");
//! ```

pub use crate::analysis::{
    find_most_related, Comparison, ComparisonReporter, RelatedPair, SilentReporter,
    StdoutReporter,
};
pub use crate::base::{generate_strand, random_base, Nucleotide, Percentage, Strand};
pub use crate::errors;
pub use crate::evolution::{PointMutation, SurvivalCriterion};
pub use crate::genome::Specimen;
pub use crate::simulation::{
    generate_population, Configuration, Population, PopulationConfig, Simulation,
};
