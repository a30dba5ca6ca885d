//! Evolutionary operators acting on strands.
//!
//! - **Mutation**: single point substitutions
//! - **Selection**: GC-content survivability screening

pub mod mutation;
pub mod selection;

pub use mutation::{point_mutation, PointMutation};
pub use selection::{SurvivalCriterion, DEFAULT_SURVIVAL_THRESHOLD};
