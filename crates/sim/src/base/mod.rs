//! Base types for strand representation.
//!
//! This module provides the foundational types for representing nucleotides,
//! strands and percentages, plus the random generators that produce them.

mod nucleotide;
mod percentage;
pub mod random;
mod strand;

pub use nucleotide::Nucleotide;
pub use percentage::Percentage;
pub use random::{generate_strand, random_base};
pub use strand::{Strand, DEFAULT_STRAND_LENGTH};
