//! Strand composition analysis.

use crate::base::{Nucleotide, Percentage, Strand};

/// Rounded percentage of C and G bases in `strand`.
///
/// An empty strand has 0% GC content.
pub fn gc_content(strand: &Strand) -> Percentage {
    Percentage::round_ratio(strand.gc_count(), strand.len())
}

/// Count each base, indexed as A=0, C=1, G=2, T=3.
pub fn nucleotide_counts(strand: &Strand) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for nuc in strand.iter() {
        counts[nuc.to_index() as usize] += 1;
    }
    counts
}

/// Pair each base with its count, in `Nucleotide::ALL` order.
pub fn nucleotide_composition(strand: &Strand) -> [(Nucleotide, usize); 4] {
    let counts = nucleotide_counts(strand);
    Nucleotide::ALL.map(|nuc| (nuc, counts[nuc.to_index() as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content(&Strand::from_str("GGCC").unwrap()).value(), 100);
        assert_eq!(gc_content(&Strand::from_str("ATAT").unwrap()).value(), 0);
        assert_eq!(gc_content(&Strand::from_str("ACGT").unwrap()).value(), 50);
        assert_eq!(gc_content(&Strand::from_str("CCGGCCGCGATATTA").unwrap()).value(), 60);
    }

    #[test]
    fn test_gc_content_empty() {
        assert_eq!(gc_content(&Strand::new()), Percentage::ZERO);
    }

    #[test]
    fn test_nucleotide_counts() {
        let strand = Strand::from_str("AACGTTT").unwrap();
        assert_eq!(nucleotide_counts(&strand), [2, 1, 1, 3]);
        assert_eq!(
            nucleotide_composition(&strand),
            [
                (Nucleotide::A, 2),
                (Nucleotide::C, 1),
                (Nucleotide::G, 1),
                (Nucleotide::T, 3)
            ]
        );
    }
}
