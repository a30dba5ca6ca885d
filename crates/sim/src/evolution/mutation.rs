//! Point mutation of strands.
//!
//! A point mutation replaces the base at one uniformly chosen position with
//! a different base. The replacement is drawn uniformly from the alphabet and
//! redrawn while it equals the current base, so each of the three other bases
//! is equally likely. The redraw loop ends almost surely (each draw succeeds
//! with probability 3/4), including on single-base strands.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{random_base, Nucleotide, Strand};

/// A single applied substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointMutation {
    /// Position in the strand that changed
    pub position: usize,
    /// Base before the mutation
    pub from: Nucleotide,
    /// Base after the mutation, never equal to `from`
    pub to: Nucleotide,
}

/// Apply one point mutation to `strand` in place.
///
/// Returns the applied change, or `None` for an empty strand (nothing to
/// mutate). Strand length never changes.
pub fn point_mutation<R: Rng + ?Sized>(strand: &mut Strand, rng: &mut R) -> Option<PointMutation> {
    if strand.is_empty() {
        return None;
    }

    let position = rng.random_range(0..strand.len());
    let from = strand.get(position)?;

    let mut to = random_base(rng);
    while to == from {
        to = random_base(rng);
    }

    strand.set(position, to).ok()?;
    Some(PointMutation { position, from, to })
}
