//! Shell generation for a Matrioshka Brain.
//!
//! Starting from an innermost shell at `T_inner`, every further shell is a
//! factor `f_T` colder and a factor `f_r` wider than the one inside it. The
//! sequence ends at the layer bound set by the termination criterion, or
//! earlier when temperature termination reaches the target outer temperature.

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Length, Luminosity, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::ValidationError;
use crate::luminosity::resolve_luminosity;
use crate::params::{InputParameters, TerminationCriterion};
use crate::thermo::{
    bit_erasure_throughput, carnot_efficiency, equilibrium_radius, landauer_limit, layer_exergy,
};

/// One concentric shell, index 0 being the innermost
///
/// `carnot` and `exergy` describe the flow from this shell into the next one,
/// so they are never set on the outermost shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Shell {
    pub layer: usize,
    /// Equilibrium temperature (K)
    pub equilibrium_temp: f64,
    pub radius_meters: f64,
    /// `radius_meters` in astronomical units
    pub radius_au: f64,
    /// Carnot efficiency towards the next shell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carnot: Option<f64>,
    /// Landauer limit at this shell's temperature (J/bit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landauer: Option<f64>,
    /// Extractable power towards the next shell (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exergy: Option<f64>,
}

/// Computed structure of a Matrioshka Brain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BrainProperties {
    pub shell_details: Vec<Shell>,
    pub total_layers: usize,
    /// Resolved stellar luminosity (W)
    pub calculated_luminosity: Luminosity,
    pub inner_shell_radius_au: f64,
    pub warnings: Vec<String>,
    /// Landauer-limited bit erasures per second at the outermost shell
    pub total_throughput: f64,
}

impl BrainProperties {
    /// The outermost shell, if any was generated
    pub fn outermost(&self) -> Option<&Shell> {
        self.shell_details.last()
    }

    /// Temperature of the outermost shell, 0 K when there is none
    pub fn final_temperature(&self) -> Temperature {
        Temperature::from_kelvin(self.outermost().map_or(0.0, |s| s.equilibrium_temp))
    }
}

/// Compute the shells of a Matrioshka Brain.
///
/// Validation happens up front and is terminal: no partial result is returned.
///
/// # Errors
/// - [`ValidationError::InvalidPhysicsParameters`] when `f_T ≥ 1`, `f_r ≤ 1`, or
///   `alpha`/`epsilon` fall outside (0, 1]
/// - [`ValidationError::NonPositiveLuminosity`] when the stellar luminosity is
///   not a positive finite number
/// - [`ValidationError::InvalidOuterTemperature`] for temperature termination
///   without `0 < T_outer < T_inner`
/// - [`ValidationError::InvalidLayerCount`] for layer termination without a
///   positive `N_max`
///
/// # Examples
/// ```
/// use matrioshka::{compute_shells, InputParameters, TerminationCriterion};
///
/// let params = InputParameters {
///     termination_criterion: TerminationCriterion::Layers,
///     n_max: Some(5),
///     ..InputParameters::default()
/// };
/// let brain = compute_shells(&params).unwrap();
/// assert_eq!(brain.total_layers, 5);
/// ```
pub fn compute_shells(params: &InputParameters) -> Result<BrainProperties, ValidationError> {
    params.check_physics()?;

    let resolved = resolve_luminosity(params)?;
    let luminosity = resolved.luminosity;

    let inner_radius = equilibrium_radius(params.alpha, params.epsilon, luminosity, params.t_inner);

    let last_layer = params.last_layer()?;
    let stop_at = match params.termination_criterion {
        TerminationCriterion::Temp => Some(params.outer_temperature()?),
        TerminationCriterion::Layers => None,
    };

    debug!(
        inner_radius_au = inner_radius.to_au(),
        last_layer = ?last_layer,
        "generating shells"
    );

    let shell_details = match last_layer {
        Some(last) => generate_shells(params, luminosity, inner_radius, last, stop_at),
        None => Vec::new(),
    };

    let final_temperature =
        Temperature::from_kelvin(shell_details.last().map_or(0.0, |s| s.equilibrium_temp));
    let inner_shell_radius_au = shell_details.first().map_or(0.0, |s| s.radius_au);

    Ok(BrainProperties {
        total_layers: shell_details.len(),
        shell_details,
        calculated_luminosity: luminosity,
        inner_shell_radius_au,
        warnings: resolved.warnings,
        total_throughput: bit_erasure_throughput(luminosity, final_temperature),
    })
}

/// Emit shells `0..=last`, stopping after the first shell at or below `stop_at`.
fn generate_shells(
    params: &InputParameters,
    luminosity: Luminosity,
    inner_radius: Length,
    last: usize,
    stop_at: Option<Temperature>,
) -> Vec<Shell> {
    let mut shells = Vec::new();
    let mut temperature = params.t_inner;
    let mut radius = inner_radius;

    for layer in 0..=last {
        let reached_outer = stop_at.is_some_and(|t_outer| temperature <= t_outer);
        // The shell that reaches T_outer is the outermost even if the bound
        // (rounded from a logarithm) would allow another one.
        let has_next = layer < last && !reached_outer;

        shells.push(Shell {
            layer,
            equilibrium_temp: temperature.to_kelvin(),
            radius_meters: radius.to_meters(),
            radius_au: radius.to_au(),
            carnot: (params.show_carnot && has_next).then(|| carnot_efficiency(params.f_t)),
            landauer: params
                .show_landauer
                .then(|| landauer_limit(temperature).to_joules()),
            exergy: (params.show_exergy && has_next)
                .then(|| layer_exergy(params.f_t, luminosity).to_watts()),
        });

        if reached_outer {
            debug!(layer, kelvin = temperature.to_kelvin(), "reached outer temperature");
            break;
        }

        temperature = temperature * params.f_t;
        radius = radius * params.f_r;
    }

    shells
}
