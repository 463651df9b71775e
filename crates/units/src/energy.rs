use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// One electron-volt in joules (exact, SI 2019)
pub const EV_TO_J: f64 = 1.602176634e-19;

/// An energy quantity using f64 precision.
///
/// Base unit is the joule. Used for per-bit thermodynamic costs, which are far
/// below anything macroscopic, so electron-volts are offered for readability.
///
/// # Examples
///
/// ```rust
/// use units::Energy;
///
/// let one_ev = Energy::from_electron_volts(1.0);
/// assert_eq!(one_ev.to_joules(), 1.602176634e-19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Energy(f64); // Base unit: Joules

impl Energy {
    /// Creates a new `Energy` from a value in joules.
    pub fn from_joules(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Energy` from a value in electron-volts.
    pub fn from_electron_volts(value: f64) -> Self {
        Self(value * EV_TO_J)
    }

    /// Returns the energy in joules.
    pub fn to_joules(&self) -> f64 {
        self.0
    }

    /// Converts the energy to electron-volts.
    pub fn to_electron_volts(&self) -> f64 {
        self.0 / EV_TO_J
    }
}

impl Mul<f64> for Energy {
    type Output = Energy;

    fn mul(self, rhs: f64) -> Energy {
        Energy(self.0 * rhs)
    }
}
