use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::composition::gc_content;
use crate::analysis::relatedness::{similarity, Comparison, ComparisonReporter};
use crate::base::{Percentage, Strand};
use crate::errors::SpecimenError;
use crate::evolution::{point_mutation, SurvivalCriterion};

/// An identified organism owning exactly one DNA strand.
///
/// The strand is owned exclusively; no two specimens share one. Mutation
/// changes strand content in place but never its length. Everything else
/// (comparison, survivability, complement) reads the strand only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specimen {
    id: u32,
    strand: Strand,
}

impl Specimen {
    /// Create a specimen, taking ownership of `strand`.
    pub fn new(id: u32, strand: Strand) -> Self {
        Self { id, strand }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn strand(&self) -> &Strand {
        &self.strand
    }

    /// Consume the specimen and return its strand.
    pub fn into_strand(self) -> Strand {
        self.strand
    }

    /// Replace the base at one random position with a different base.
    ///
    /// Exactly one position changes and all others keep their base. Returns
    /// `self` so calls can be chained. A specimen with an empty strand is
    /// left as is.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        match point_mutation(&mut self.strand, rng) {
            Some(m) => log::trace!(
                "Specimen #{}: {} -> {} at position {}",
                self.id,
                m.from,
                m.to,
                m.position
            ),
            None => log::debug!("Specimen #{} has an empty strand, nothing to mutate", self.id),
        }
        self
    }

    /// Percentage of positions sharing the same base with `other`.
    ///
    /// Pure; see [`Specimen::compare`] for the reporting variant.
    pub fn similarity(&self, other: &Specimen) -> Result<Percentage, SpecimenError> {
        similarity(&self.strand, &other.strand)
    }

    /// Compare with `other`, report the result, and return the percentage.
    ///
    /// The report is handed to `reporter` as a [`Comparison`] whose display
    /// form is `Specimen #<a> and Specimen #<b> have <p>% DNA in common.`
    pub fn compare<R: ComparisonReporter + ?Sized>(
        &self,
        other: &Specimen,
        reporter: &mut R,
    ) -> Result<Percentage, SpecimenError> {
        let percentage = self.similarity(other)?;
        reporter.report(&Comparison {
            left: self.id,
            right: other.id,
            percentage,
        });
        Ok(percentage)
    }

    /// Rounded percentage of C/G bases.
    pub fn gc_content(&self) -> Percentage {
        gc_content(&self.strand)
    }

    /// True when at least 60% (rounded) of the strand is C or G.
    pub fn likely_to_survive(&self) -> bool {
        self.survives(&SurvivalCriterion::default())
    }

    /// Check survivability against a custom criterion.
    pub fn survives(&self, criterion: &SurvivalCriterion) -> bool {
        criterion.survives(&self.strand)
    }

    /// Return the complementary strand (A <-> T, C <-> G) without
    /// modifying this specimen.
    pub fn complement_strand(&self) -> Strand {
        self.strand.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::relatedness::SilentReporter;
    use crate::base::{generate_strand, Nucleotide};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::str::FromStr;

    fn specimen(id: u32, strand: &str) -> Specimen {
        Specimen::new(id, Strand::from_str(strand).unwrap())
    }

    #[test]
    fn test_specimen_new_stores_fields() {
        let strand = Strand::from_str("ATCGATCGATCGATC").unwrap();
        let s = Specimen::new(1, strand.clone());
        assert_eq!(s.id(), 1);
        assert_eq!(s.strand(), &strand);
    }

    #[test]
    fn test_mutate_changes_one_position() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut s = Specimen::new(1, generate_strand(&mut rng, 15));
        let original = s.strand().clone();

        s.mutate(&mut rng);

        let diffs: Vec<usize> = (0..15)
            .filter(|&i| original.get(i) != s.strand().get(i))
            .collect();
        assert_eq!(diffs.len(), 1);
        assert_eq!(s.strand().len(), 15);
        assert_eq!(s.id(), 1);
    }

    #[test]
    fn test_mutate_is_chainable() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut s = specimen(9, "A");
        let id = s.mutate(&mut rng).mutate(&mut rng).id();
        assert_eq!(id, 9);
        assert_eq!(s.strand().len(), 1);
    }

    #[test]
    fn test_mutate_empty_strand_is_noop() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut s = Specimen::new(1, Strand::new());
        s.mutate(&mut rng);
        assert!(s.strand().is_empty());
    }

    #[test]
    fn test_compare_identical_is_full() {
        let a = specimen(1, "ATCGATCGATCGATC");
        let b = specimen(2, "ATCGATCGATCGATC");
        let mut reports: Vec<Comparison> = Vec::new();

        let pct = a.compare(&b, &mut reports).unwrap();

        assert_eq!(pct, Percentage::FULL);
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].to_string(),
            "Specimen #1 and Specimen #2 have 100% DNA in common."
        );
    }

    #[test]
    fn test_compare_is_symmetric() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        for _ in 0..50 {
            let a = Specimen::new(1, generate_strand(&mut rng, 15));
            let b = Specimen::new(2, generate_strand(&mut rng, 15));
            assert_eq!(
                a.compare(&b, &mut SilentReporter).unwrap(),
                b.compare(&a, &mut SilentReporter).unwrap()
            );
        }
    }

    #[test]
    fn test_compare_reports_matching_percentage() {
        let a = specimen(1, "ATCGATCGATCGATC");
        let c = specimen(3, "TGCATACGATCGATC");
        let mut reports: Vec<Comparison> = Vec::new();

        let pct = a.compare(&c, &mut reports).unwrap();

        // 10 of 15 match -> 67%
        assert_eq!(pct.value(), 67);
        assert_eq!(
            reports[0].to_string(),
            "Specimen #1 and Specimen #3 have 67% DNA in common."
        );
    }

    #[test]
    fn test_compare_length_mismatch_does_not_report() {
        let a = specimen(1, "ATCG");
        let b = specimen(2, "ATCGA");
        let mut reports: Vec<Comparison> = Vec::new();
        assert_eq!(
            a.compare(&b, &mut reports),
            Err(SpecimenError::LengthMismatch { left: 4, right: 5 })
        );
        assert!(reports.is_empty());
    }

    #[test]
    fn test_likely_to_survive() {
        assert!(specimen(1, "CCGGCCGCGATATTA").likely_to_survive());
        assert!(!specimen(5, "AAAAAAAAAAAAAAA").likely_to_survive());
    }

    #[test]
    fn test_survives_custom_criterion() {
        let s = specimen(1, "GCAT");
        assert!(s.survives(&SurvivalCriterion::new(50).unwrap()));
        assert!(!s.survives(&SurvivalCriterion::new(51).unwrap()));
    }

    #[test]
    fn test_complement_strand() {
        let s = specimen(1, "ATCGAC");
        let complement = s.complement_strand();
        assert_eq!(complement.to_string(), "TAGCTG");
        assert_eq!(s.strand().to_string(), "ATCGAC");
        assert_eq!(complement.complement(), *s.strand());
    }

    #[test]
    fn test_specimen_serde() {
        let s = specimen(7, "GATTACA");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"id":7,"strand":"GATTACA"}"#);
        let back: Specimen = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.strand().get(1), Some(Nucleotide::A));
    }
}
