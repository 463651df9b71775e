//! Input parameters for a single shell-model computation.
//!
//! The serialized field names follow the wire format used by the browser
//! client (`luminosityMethod`, `starMass`, `T_inner`, `f_T`, `N_max`, ...).
//! Partial objects deserialize with the remaining fields taken from the
//! defaults, except `T_outer` and `N_max`, which stay missing so the matching
//! termination criterion rejects them.

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::ValidationError;

/// Which stellar inputs determine the luminosity of the central star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum LuminosityMethod {
    /// Mass–luminosity law L = L☉ · M^2.3 (red dwarfs)
    #[default]
    Mass,
    /// Stefan–Boltzmann law from stellar radius and effective temperature
    RadiusTemp,
    /// Luminosity given directly in watts
    Direct,
}

/// How the outermost shell is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum TerminationCriterion {
    /// Stop at the first shell at or below the target outer temperature
    #[default]
    Temp,
    /// Build a fixed number of shells
    Layers,
}

/// Stellar, material and architectural inputs of one computation
///
/// Only the stellar fields selected by `luminosity_method` are read. Likewise
/// `t_outer` is only read for [`TerminationCriterion::Temp`] and `n_max` only
/// for [`TerminationCriterion::Layers`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct InputParameters {
    pub luminosity_method: LuminosityMethod,
    /// Stellar mass in solar masses (M☉)
    pub star_mass: Mass,
    /// Stellar radius (serialized in meters)
    pub star_radius: Length,
    /// Stellar effective temperature (K)
    pub star_teff: Temperature,
    /// Stellar luminosity (W)
    pub star_luminosity: Luminosity,
    /// Shell absorptivity, 0 < α ≤ 1
    pub alpha: f64,
    /// Shell emissivity, 0 < ε ≤ 1
    pub epsilon: f64,
    /// Equilibrium temperature of the innermost shell (K)
    #[serde(rename = "T_inner")]
    pub t_inner: Temperature,
    /// Temperature ratio between consecutive shells, f_T < 1
    #[serde(rename = "f_T")]
    pub f_t: f64,
    /// Radius ratio between consecutive shells, f_r > 1
    #[serde(rename = "f_r")]
    pub f_r: f64,
    pub termination_criterion: TerminationCriterion,
    /// Target outer temperature (K), missing unless sent
    #[serde(rename = "T_outer", default)]
    pub t_outer: Option<Temperature>,
    /// Total number of shells, missing unless sent
    #[serde(rename = "N_max", default)]
    pub n_max: Option<u32>,
    pub show_carnot: bool,
    pub show_landauer: bool,
    pub show_exergy: bool,
}

impl Default for InputParameters {
    /// A Sun-like star wrapped from 1000 K down to the microwave background.
    fn default() -> Self {
        Self {
            luminosity_method: LuminosityMethod::Mass,
            star_mass: Mass::from_solar_masses(1.0),
            star_radius: Length::from_solar_radii(1.0),
            star_teff: Temperature::from_kelvin(5778.0),
            star_luminosity: Luminosity::from_solar_luminosities(1.0),
            alpha: 0.99,
            epsilon: 0.99,
            t_inner: Temperature::from_kelvin(1000.0),
            f_t: 0.5,
            f_r: 4.0,
            termination_criterion: TerminationCriterion::Temp,
            t_outer: Some(Temperature::from_kelvin(3.0)),
            n_max: Some(20),
            show_carnot: false,
            show_landauer: true,
            show_exergy: false,
        }
    }
}

impl InputParameters {
    /// Check the architecture factors and surface properties.
    ///
    /// Only the upper bound of `f_t` and the lower bound of `f_r` are enforced.
    pub fn check_physics(&self) -> Result<(), ValidationError> {
        if self.f_t >= 1.0
            || self.f_r <= 1.0
            || self.alpha <= 0.0
            || self.alpha > 1.0
            || self.epsilon <= 0.0
            || self.epsilon > 1.0
        {
            return Err(ValidationError::InvalidPhysicsParameters);
        }
        Ok(())
    }

    /// Index of the last shell the loop may reach, per the termination criterion.
    ///
    /// `Ok(None)` means the bound is not a finite number, in which case no shell
    /// is generated.
    pub fn last_layer(&self) -> Result<Option<usize>, ValidationError> {
        match self.termination_criterion {
            TerminationCriterion::Temp => {
                let t_outer = self.outer_temperature()?;
                let steps = ((t_outer / self.t_inner).ln() / self.f_t.ln()).ceil();
                Ok(steps.is_finite().then(|| steps.max(0.0) as usize))
            }
            TerminationCriterion::Layers => match self.n_max {
                Some(n) if n > 0 => Ok(Some(n as usize - 1)),
                _ => Err(ValidationError::InvalidLayerCount),
            },
        }
    }

    /// The target outer temperature, when it lies strictly between 0 K and `t_inner`.
    pub fn outer_temperature(&self) -> Result<Temperature, ValidationError> {
        match self.t_outer {
            // Written as a negated comparison so a NaN inner temperature does not reject it
            Some(t) if t.to_kelvin() > 0.0 && !(t >= self.t_inner) => Ok(t),
            _ => Err(ValidationError::InvalidOuterTemperature),
        }
    }
}
