//! Analysis of strands and populations: composition and relatedness.

pub mod composition;
pub mod relatedness;

pub use composition::{gc_content, nucleotide_composition, nucleotide_counts};
pub use relatedness::{
    find_most_related, similarity, Comparison, ComparisonReporter, RelatedPair, SilentReporter,
    StdoutReporter,
};
