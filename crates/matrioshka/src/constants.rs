//! Physical constants for the shell model (SI units).

pub use units::{AU_TO_M, SOLAR_LUMINOSITY_W};

/// Stefan–Boltzmann constant (W·m⁻²·K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Natural logarithm of 2, the entropy of one bit in nats
///
/// Truncated to 11 decimals.
#[allow(clippy::approx_constant)]
pub const LN_2: f64 = 0.69314718056;

/// Exponent of the low-mass main sequence mass–luminosity law, L ∝ M^2.3
pub const MASS_LUMINOSITY_EXPONENT: f64 = 2.3;

/// Upper mass (M☉) for which the L ∝ M^2.3 law is a fair approximation
pub const RED_DWARF_MASS_LIMIT: f64 = 0.5;

/// Pi
pub const PI: f64 = std::f64::consts::PI;
