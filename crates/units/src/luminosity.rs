use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Nominal solar luminosity in watts (IAU 2015 Resolution B3)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// A radiant power quantity using f64 precision.
///
/// The `Luminosity` struct represents the total power output of a star with
/// watts as the base unit. Solar luminosities are available as a convenience.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar_luminosities(1.0);
/// assert_eq!(sun.to_watts(), 3.828e26);
///
/// let half = sun * 0.5;
/// assert_eq!(half.to_solar_luminosities(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: Watts

impl Luminosity {
    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in solar luminosities (L☉).
    pub fn from_solar_luminosities(value: f64) -> Self {
        Self(value * SOLAR_LUMINOSITY_W)
    }

    /// Returns the luminosity in watts.
    pub fn to_watts(&self) -> f64 {
        self.0
    }

    /// Converts the luminosity to solar luminosities.
    pub fn to_solar_luminosities(&self) -> f64 {
        self.0 / SOLAR_LUMINOSITY_W
    }

    /// True for a strictly positive, finite power output.
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}

/// Allow f64 * Luminosity (commutative multiplication)
impl Mul<Luminosity> for f64 {
    type Output = Luminosity;

    fn mul(self, rhs: Luminosity) -> Luminosity {
        rhs * self
    }
}

impl Div<f64> for Luminosity {
    type Output = Luminosity;

    fn div(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 / rhs)
    }
}
