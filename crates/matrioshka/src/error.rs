//! Validation failures raised by the shell model.

use thiserror::Error;

/// Why a set of input parameters cannot produce a shell structure.
///
/// The display text of each variant is the message shown to the end user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Temperature/radius factors or surface properties out of range
    #[error("Invalid physics parameters.")]
    InvalidPhysicsParameters,

    /// The resolved stellar luminosity is zero, negative or not finite
    #[error("Could not calculate a positive stellar luminosity.")]
    NonPositiveLuminosity,

    /// Missing outer temperature, or not strictly between zero and the inner temperature
    #[error("Invalid outer temperature.")]
    InvalidOuterTemperature,

    /// Missing or zero layer count
    #[error("Invalid number of layers.")]
    InvalidLayerCount,
}
