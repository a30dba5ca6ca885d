//! # aequor-sim
//!
//! Random DNA specimens: strands are drawn base by base, specimens carrying
//! them can be point-mutated, screened for survivability by GC content,
//! complemented and compared, and a population can be searched for its most
//! related pair.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{Nucleotide, Percentage, Strand};
pub use genome::Specimen;
