//! Random base and strand generation.
//!
//! Every generator takes the random source explicitly so callers can choose
//! between the thread RNG and a seeded generator for reproducible runs. The
//! `thread_*` variants are shortcuts over `rand::rng()`.

use rand::Rng;

use super::{Nucleotide, Strand, DEFAULT_STRAND_LENGTH};

/// Draw one base uniformly from {A, C, G, T}.
#[inline]
pub fn random_base<R: Rng + ?Sized>(rng: &mut R) -> Nucleotide {
    Nucleotide::random(rng)
}

/// Generate a strand of `length` independently drawn bases.
///
/// Draws are with replacement, so a base may repeat any number of times.
pub fn generate_strand<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Strand {
    Strand::random(rng, length)
}

pub fn thread_random_base() -> Nucleotide {
    random_base(&mut rand::rng())
}

/// Generate a strand of `DEFAULT_STRAND_LENGTH` bases from the thread RNG.
pub fn thread_generate_strand() -> Strand {
    generate_strand(&mut rand::rng(), DEFAULT_STRAND_LENGTH)
}
