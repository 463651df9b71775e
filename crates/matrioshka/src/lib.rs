//! Matrioshka Brain shell model.
//!
//! Computes the concentric energy-harvesting shells around a star from its
//! luminosity and the thermodynamic properties of the shell material, along
//! with the view-model used by the interactive builder.

pub mod constants;
pub mod display;
pub mod error;
pub mod form;
pub mod luminosity;
pub mod params;
pub mod shell_model;
pub mod thermo;

#[cfg(test)]
mod form_test;

pub use error::ValidationError;
pub use form::{ArchitectureDriver, FormChange, FormState, NumericField};
pub use luminosity::{resolve_luminosity, ResolvedLuminosity};
pub use params::{InputParameters, LuminosityMethod, TerminationCriterion};
pub use shell_model::{compute_shells, BrainProperties, Shell};
