//! Stellar luminosity from the selected stellar inputs.

use tracing::{debug, warn};
use units::{Length, Luminosity, Mass, Temperature};

use crate::constants::{
    MASS_LUMINOSITY_EXPONENT, PI, RED_DWARF_MASS_LIMIT, SOLAR_LUMINOSITY_W, STEFAN_BOLTZMANN,
};
use crate::error::ValidationError;
use crate::params::{InputParameters, LuminosityMethod};

/// Warning attached when the mass–luminosity law is applied outside red dwarfs
pub const MASS_LUMINOSITY_WARNING: &str = "Scientific Accuracy: The mass-luminosity law M^2.3 is only accurate for red dwarfs (< 0.5 M☉). The result may be inaccurate.";

/// A luminosity together with any accuracy caveats raised while deriving it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLuminosity {
    pub luminosity: Luminosity,
    pub warnings: Vec<String>,
}

/// Low-mass main sequence mass–luminosity relation, L = L☉ · M^2.3
pub fn mass_luminosity(mass: Mass) -> Luminosity {
    Luminosity::from_watts(SOLAR_LUMINOSITY_W * mass.powf(MASS_LUMINOSITY_EXPONENT))
}

/// Blackbody luminosity of a sphere, L = 4πR²σT⁴
pub fn stefan_boltzmann_luminosity(radius: Length, teff: Temperature) -> Luminosity {
    Luminosity::from_watts(4.0 * PI * radius.powi(2) * STEFAN_BOLTZMANN * teff.powi(4))
}

/// Derive the stellar luminosity using the method selected in `params`.
///
/// # Errors
/// [`ValidationError::NonPositiveLuminosity`] unless the result is positive and finite.
pub fn resolve_luminosity(params: &InputParameters) -> Result<ResolvedLuminosity, ValidationError> {
    let mut warnings = Vec::new();

    let luminosity = match params.luminosity_method {
        LuminosityMethod::Direct => params.star_luminosity,
        LuminosityMethod::RadiusTemp => {
            stefan_boltzmann_luminosity(params.star_radius, params.star_teff)
        }
        LuminosityMethod::Mass => {
            let mass = params.star_mass;
            if mass.to_solar_masses() > RED_DWARF_MASS_LIMIT {
                warn!(
                    mass_solar = mass.to_solar_masses(),
                    "mass-luminosity law applied above the red dwarf range"
                );
                warnings.push(MASS_LUMINOSITY_WARNING.to_string());
            }
            mass_luminosity(mass)
        }
    };

    if !luminosity.is_physical() {
        return Err(ValidationError::NonPositiveLuminosity);
    }

    debug!(
        method = ?params.luminosity_method,
        watts = luminosity.to_watts(),
        "resolved stellar luminosity"
    );

    Ok(ResolvedLuminosity {
        luminosity,
        warnings,
    })
}
