//! Specimens: identified organisms carrying a single DNA strand.

mod specimen;

pub use specimen::Specimen;
