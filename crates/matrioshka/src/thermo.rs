//! Radiative balance and thermodynamic limits for nested shells.
//!
//! Each shell absorbs the full stellar output on its inner face and re-radiates
//! it outward from a surface at its equilibrium temperature. The next shell out
//! sees the same luminosity, so the relations below only depend on the star,
//! the surface properties, and the ratio between consecutive shells.
//!
//! # References
//! - Bradbury (1997) - "Matrioshka Brains"
//! - Landauer (1961) - "Irreversibility and Heat Generation in the Computing Process"

use units::{Energy, Length, Luminosity, Temperature};

use crate::constants::{BOLTZMANN, LN_2, PI, STEFAN_BOLTZMANN};

/// Radius at which a shell with absorptivity `alpha` and emissivity `epsilon`
/// settles at `temperature` around a star of the given luminosity.
///
/// From α·L = 4πr²·ε·σ·T⁴:
///
/// r = √(α·L / (4π·ε·σ·T⁴))
///
/// # Examples
/// ```
/// use matrioshka::thermo::equilibrium_radius;
/// use units::{Luminosity, Temperature};
///
/// // A grey shell enclosing the Sun at 1 AU sits near 394 K
/// let sun = Luminosity::from_solar_luminosities(1.0);
/// let r = equilibrium_radius(0.5, 0.5, sun, Temperature::from_kelvin(393.6));
/// assert!((r.to_au() - 1.0).abs() < 0.01);
/// ```
pub fn equilibrium_radius(
    alpha: f64,
    epsilon: f64,
    luminosity: Luminosity,
    temperature: Temperature,
) -> Length {
    Length::from_meters(
        ((alpha * luminosity.to_watts())
            / (4.0 * PI * epsilon * STEFAN_BOLTZMANN * temperature.powi(4)))
        .sqrt(),
    )
}

/// Minimum energy to erase one bit at `temperature`, E = k_B·T·ln2.
pub fn landauer_limit(temperature: Temperature) -> Energy {
    Energy::from_joules(BOLTZMANN * temperature.to_kelvin() * LN_2)
}

/// Carnot efficiency of an engine running from one shell to the next,
/// η = 1 − T_cold/T_hot = 1 − f_T.
pub fn carnot_efficiency(temperature_factor: f64) -> f64 {
    1.0 - temperature_factor
}

/// Upper bound on the work a shell can extract from the stellar flow passing
/// through it, (1 − f_T)·L.
pub fn layer_exergy(temperature_factor: f64, luminosity: Luminosity) -> Luminosity {
    carnot_efficiency(temperature_factor) * luminosity
}

/// Bit erasures per second if the whole luminosity were spent at the Landauer
/// limit of a sink at `temperature`. Zero for a non-positive temperature.
pub fn bit_erasure_throughput(luminosity: Luminosity, temperature: Temperature) -> f64 {
    if temperature.to_kelvin() > 0.0 {
        luminosity.to_watts() / landauer_limit(temperature).to_joules()
    } else {
        0.0
    }
}

/// Radius factor implied by a temperature factor, f_r = √α / f_T².
pub fn linked_radius_factor(alpha: f64, temperature_factor: f64) -> f64 {
    alpha.sqrt() / (temperature_factor * temperature_factor)
}

/// Temperature factor implied by a radius factor, f_T = α^¼ / √f_r.
pub fn linked_temperature_factor(alpha: f64, radius_factor: f64) -> f64 {
    alpha.powf(0.25) / radius_factor.sqrt()
}
