//! Form state for the interactive brain builder.
//!
//! The browser keeps every numeric input as raw text. This module holds that
//! text, applies edits the way the form does (sanitizing numbers, keeping the
//! temperature and radius factors physically linked, mirroring absorptivity
//! into emissivity) and coerces the text into [`InputParameters`].

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::display::fixed;
use crate::params::{InputParameters, LuminosityMethod, TerminationCriterion};
use crate::thermo::{linked_radius_factor, linked_temperature_factor};

/// Which architecture factor the user controls; the other is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ArchitectureDriver {
    #[default]
    Radius,
    Temp,
}

/// Text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum NumericField {
    #[serde(rename = "starMass")]
    StarMass,
    #[serde(rename = "starRadius")]
    StarRadius,
    #[serde(rename = "starTeff")]
    StarTeff,
    #[serde(rename = "starLuminosity")]
    StarLuminosity,
    #[serde(rename = "alpha")]
    Alpha,
    #[serde(rename = "epsilon")]
    Epsilon,
    #[serde(rename = "T_inner")]
    InnerTemp,
    #[serde(rename = "f_r")]
    RadiusFactor,
    #[serde(rename = "f_T")]
    TempFactor,
    #[serde(rename = "T_outer")]
    OuterTemp,
    #[serde(rename = "N_max")]
    LayerCount,
}

/// A single edit made in the form
///
/// Serialized as `{ "field": "...", "value": ... }` using the form's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum FormChange {
    #[serde(rename = "luminosityMethod")]
    LuminosityMethod(LuminosityMethod),
    #[serde(rename = "architectureDriver")]
    ArchitectureDriver(ArchitectureDriver),
    #[serde(rename = "terminationCriterion")]
    TerminationCriterion(TerminationCriterion),
    #[serde(rename = "sameAlphaEpsilon")]
    SameAlphaEpsilon(bool),
    #[serde(rename = "showCarnot")]
    ShowCarnot(bool),
    #[serde(rename = "showLandauer")]
    ShowLandauer(bool),
    #[serde(rename = "showExergy")]
    ShowExergy(bool),
    #[serde(rename = "starMass")]
    StarMass(String),
    #[serde(rename = "starRadius")]
    StarRadius(String),
    #[serde(rename = "starTeff")]
    StarTeff(String),
    #[serde(rename = "starLuminosity")]
    StarLuminosity(String),
    #[serde(rename = "alpha")]
    Alpha(String),
    #[serde(rename = "epsilon")]
    Epsilon(String),
    #[serde(rename = "T_inner")]
    InnerTemp(String),
    #[serde(rename = "f_r")]
    RadiusFactor(String),
    #[serde(rename = "f_T")]
    TempFactor(String),
    #[serde(rename = "T_outer")]
    OuterTemp(String),
    #[serde(rename = "N_max")]
    LayerCount(String),
}

impl FormChange {
    /// Text edit of a numeric field
    pub fn text(field: NumericField, text: impl Into<String>) -> Self {
        let text = text.into();
        match field {
            NumericField::StarMass => Self::StarMass(text),
            NumericField::StarRadius => Self::StarRadius(text),
            NumericField::StarTeff => Self::StarTeff(text),
            NumericField::StarLuminosity => Self::StarLuminosity(text),
            NumericField::Alpha => Self::Alpha(text),
            NumericField::Epsilon => Self::Epsilon(text),
            NumericField::InnerTemp => Self::InnerTemp(text),
            NumericField::RadiusFactor => Self::RadiusFactor(text),
            NumericField::TempFactor => Self::TempFactor(text),
            NumericField::OuterTemp => Self::OuterTemp(text),
            NumericField::LayerCount => Self::LayerCount(text),
        }
    }
}

/// Raw state of the brain builder form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FormState {
    pub luminosity_method: LuminosityMethod,
    pub star_mass: String,
    pub star_radius: String,
    pub star_teff: String,
    pub star_luminosity: String,
    pub alpha: String,
    pub epsilon: String,
    pub same_alpha_epsilon: bool,
    #[serde(rename = "T_inner")]
    pub t_inner: String,
    pub architecture_driver: ArchitectureDriver,
    #[serde(rename = "f_T")]
    pub f_t: String,
    #[serde(rename = "f_r")]
    pub f_r: String,
    pub termination_criterion: TerminationCriterion,
    #[serde(rename = "T_outer")]
    pub t_outer: String,
    #[serde(rename = "N_max")]
    pub n_max: String,
    pub show_carnot: bool,
    pub show_landauer: bool,
    pub show_exergy: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            luminosity_method: LuminosityMethod::Mass,
            star_mass: "1".into(),
            star_radius: "6.957e8".into(),
            star_teff: "5778".into(),
            star_luminosity: "3.828e26".into(),
            alpha: "0.99".into(),
            epsilon: "0.99".into(),
            same_alpha_epsilon: true,
            t_inner: "1000".into(),
            architecture_driver: ArchitectureDriver::Radius,
            f_t: "0.50".into(),
            f_r: "4.00".into(),
            termination_criterion: TerminationCriterion::Temp,
            t_outer: "3".into(),
            n_max: "20".into(),
            show_carnot: false,
            show_landauer: true,
            show_exergy: false,
        }
    }
}

impl FormState {
    /// Apply one edit, including the derived updates it triggers.
    pub fn apply(&mut self, change: FormChange) {
        match change {
            FormChange::LuminosityMethod(method) => self.luminosity_method = method,
            FormChange::TerminationCriterion(criterion) => self.termination_criterion = criterion,
            FormChange::ShowCarnot(on) => self.show_carnot = on,
            FormChange::ShowLandauer(on) => self.show_landauer = on,
            FormChange::ShowExergy(on) => self.show_exergy = on,
            FormChange::ArchitectureDriver(driver) => {
                self.architecture_driver = driver;
                self.relink_factors(driver);
            }
            FormChange::SameAlphaEpsilon(same) => {
                self.same_alpha_epsilon = same;
                if same {
                    self.epsilon = self.alpha.clone();
                }
            }
            FormChange::StarMass(text) => self.star_mass = sanitize_numeric(&text),
            FormChange::StarRadius(text) => self.star_radius = sanitize_numeric(&text),
            FormChange::StarTeff(text) => self.star_teff = sanitize_numeric(&text),
            FormChange::StarLuminosity(text) => self.star_luminosity = sanitize_numeric(&text),
            FormChange::Epsilon(text) => self.epsilon = sanitize_numeric(&text),
            FormChange::InnerTemp(text) => self.t_inner = sanitize_numeric(&text),
            FormChange::OuterTemp(text) => self.t_outer = sanitize_numeric(&text),
            FormChange::LayerCount(text) => self.n_max = sanitize_numeric(&text),
            FormChange::Alpha(text) => {
                self.alpha = sanitize_numeric(&text);
                self.relink_factors(self.architecture_driver);
                if self.same_alpha_epsilon {
                    self.epsilon = self.alpha.clone();
                }
            }
            FormChange::TempFactor(text) => {
                self.f_t = sanitize_numeric(&text);
                self.relink_factors(ArchitectureDriver::Temp);
            }
            FormChange::RadiusFactor(text) => {
                self.f_r = sanitize_numeric(&text);
                self.relink_factors(ArchitectureDriver::Radius);
            }
        }
    }

    /// Overwrite the factor not controlled by `driver` with its linked value.
    ///
    /// Leaves both factors untouched unless alpha and the driving factor parse
    /// to values in range.
    fn relink_factors(&mut self, driver: ArchitectureDriver) {
        let alpha = parse_float(&self.alpha);
        if !alpha.is_finite() || alpha <= 0.0 {
            return;
        }

        match driver {
            ArchitectureDriver::Temp => {
                let f_t = parse_float(&self.f_t);
                if f_t.is_finite() && f_t > 0.0 && f_t < 1.0 {
                    self.f_r = fixed(linked_radius_factor(alpha, f_t), 4);
                }
            }
            ArchitectureDriver::Radius => {
                let f_r = parse_float(&self.f_r);
                if f_r.is_finite() && f_r > 1.0 {
                    self.f_t = fixed(linked_temperature_factor(alpha, f_r), 4);
                }
            }
        }
    }

    /// Whether a field is shown for the current luminosity method and criterion.
    pub fn is_visible(&self, field: NumericField) -> bool {
        match field {
            NumericField::StarMass => self.luminosity_method == LuminosityMethod::Mass,
            NumericField::StarRadius | NumericField::StarTeff => {
                self.luminosity_method == LuminosityMethod::RadiusTemp
            }
            NumericField::StarLuminosity => self.luminosity_method == LuminosityMethod::Direct,
            NumericField::OuterTemp => self.termination_criterion == TerminationCriterion::Temp,
            NumericField::LayerCount => self.termination_criterion == TerminationCriterion::Layers,
            _ => true,
        }
    }

    /// Whether a field accepts edits; derived fields are read-only.
    pub fn is_enabled(&self, field: NumericField) -> bool {
        match field {
            NumericField::Epsilon => !self.same_alpha_epsilon,
            NumericField::RadiusFactor => self.architecture_driver == ArchitectureDriver::Radius,
            NumericField::TempFactor => self.architecture_driver == ArchitectureDriver::Temp,
            _ => true,
        }
    }

    /// Coerce the form text into computation inputs.
    ///
    /// Unparsable numbers become NaN and are left for validation to reject. An
    /// outer temperature that is not a number is treated as missing, and a layer
    /// count that is not a positive whole number likewise.
    pub fn to_parameters(&self) -> InputParameters {
        let t_outer = parse_float(&self.t_outer);

        InputParameters {
            luminosity_method: self.luminosity_method,
            star_mass: Mass::from_solar_masses(parse_float(&self.star_mass)),
            star_radius: Length::from_meters(parse_float(&self.star_radius)),
            star_teff: Temperature::from_kelvin(parse_float(&self.star_teff)),
            star_luminosity: Luminosity::from_watts(parse_float(&self.star_luminosity)),
            alpha: parse_float(&self.alpha),
            epsilon: parse_float(&self.epsilon),
            t_inner: Temperature::from_kelvin(parse_float(&self.t_inner)),
            f_t: parse_float(&self.f_t),
            f_r: parse_float(&self.f_r),
            termination_criterion: self.termination_criterion,
            t_outer: (!t_outer.is_nan()).then(|| Temperature::from_kelvin(t_outer)),
            n_max: parse_layer_count(&self.n_max),
            show_carnot: self.show_carnot,
            show_landauer: self.show_landauer,
            show_exergy: self.show_exergy,
        }
    }

    /// Restore the initial form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Drop every character that cannot appear in a plain decimal or exponent literal.
pub fn sanitize_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | '-'))
        .collect()
}

/// Parse the longest numeric prefix of `text`, or NaN when there is none.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"4.5kg"`
/// reads as 4.5 and `"1e"` as 1. `"Infinity"` is accepted with an optional sign.
///
/// # Examples
/// ```
/// use matrioshka::form::parse_float;
///
/// assert_eq!(parse_float("  3.828e26 W"), 3.828e26);
/// assert_eq!(parse_float("0.5.1"), 0.5);
/// assert!(parse_float("e5").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

fn parse_layer_count(text: &str) -> Option<u32> {
    let n = parse_float(text);
    (n >= 1.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX)).then(|| n as u32)
}
