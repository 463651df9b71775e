//! Tests for the builder form state

use units::Temperature;

use crate::form::{
    parse_float, sanitize_numeric, ArchitectureDriver, FormChange, FormState, NumericField,
};
use crate::params::{InputParameters, LuminosityMethod, TerminationCriterion};

// ========== Numeric Text ==========

#[test]
fn test_sanitize_keeps_only_number_characters() {
    assert_eq!(sanitize_numeric("1,000 K"), "1000");
    assert_eq!(sanitize_numeric("3.828e26 W"), "3.828e26");
    assert_eq!(sanitize_numeric("-0.5"), "-0.5");
    assert_eq!(sanitize_numeric("1E5"), "15");
    assert_eq!(sanitize_numeric("abc"), "");
}

#[test]
fn test_parse_float_reads_longest_prefix() {
    assert_eq!(parse_float("1000"), 1000.0);
    assert_eq!(parse_float("0.50"), 0.5);
    assert_eq!(parse_float("6.957e8"), 6.957e8);
    assert_eq!(parse_float("-2.5e-3"), -2.5e-3);
    assert_eq!(parse_float("1e"), 1.0);
    assert_eq!(parse_float("1e-"), 1.0);
    assert_eq!(parse_float("4."), 4.0);
    assert_eq!(parse_float(".25"), 0.25);
    assert_eq!(parse_float("0.5.1"), 0.5);
    assert_eq!(parse_float("12-3"), 12.0);
    assert_eq!(parse_float("  7 K"), 7.0);
    assert_eq!(parse_float("+3"), 3.0);
    assert_eq!(parse_float("Infinity"), f64::INFINITY);
    assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
}

#[test]
fn test_parse_float_without_digits_is_nan() {
    for text in ["", ".", "-", "e5", "-.", "abc", "-e"] {
        assert!(parse_float(text).is_nan(), "{text:?} should not parse");
    }
}

// ========== Edits ==========

#[test]
fn test_temperature_factor_edit_derives_radius_factor() {
    let mut form = FormState::default();
    form.apply(FormChange::ArchitectureDriver(ArchitectureDriver::Temp));
    form.apply(FormChange::TempFactor("0.5".into()));

    assert_eq!(form.f_t, "0.5");
    // √0.99 / 0.5²
    assert_eq!(form.f_r, "3.9799");
}

#[test]
fn test_radius_factor_edit_derives_temperature_factor() {
    let mut form = FormState::default();
    form.apply(FormChange::RadiusFactor("4".into()));

    assert_eq!(form.f_r, "4");
    // 0.99^¼ / √4
    assert_eq!(form.f_t, "0.4987");
}

#[test]
fn test_out_of_range_factor_leaves_partner_untouched() {
    let mut form = FormState::default();
    form.apply(FormChange::TempFactor("1.5".into()));
    assert_eq!(form.f_t, "1.5");
    assert_eq!(form.f_r, "4.00");

    form.apply(FormChange::RadiusFactor("0.9".into()));
    assert_eq!(form.f_r, "0.9");
    assert_eq!(form.f_t, "1.5");
}

#[test]
fn test_alpha_edit_relinks_with_current_driver_and_mirrors_epsilon() {
    let mut form = FormState::default();
    form.apply(FormChange::Alpha("0.81".into()));

    assert_eq!(form.alpha, "0.81");
    assert_eq!(form.epsilon, "0.81");
    // driver is radius: f_T = 0.81^¼ / √4
    assert_eq!(form.f_t, "0.4743");
    assert_eq!(form.f_r, "4.00");

    form.apply(FormChange::ArchitectureDriver(ArchitectureDriver::Temp));
    form.apply(FormChange::TempFactor("0.4".into()));
    form.apply(FormChange::Alpha("0.81".into()));
    // driver is temp: f_r = √0.81 / 0.4²
    assert_eq!(form.f_r, "5.6250");
}

#[test]
fn test_invalid_alpha_skips_linking_but_still_mirrors() {
    let mut form = FormState::default();
    form.apply(FormChange::Alpha("0".into()));

    assert_eq!(form.f_t, "0.50");
    assert_eq!(form.f_r, "4.00");
    assert_eq!(form.epsilon, "0");
}

#[test]
fn test_alpha_and_epsilon_decoupled() {
    let mut form = FormState::default();
    form.apply(FormChange::SameAlphaEpsilon(false));
    form.apply(FormChange::Epsilon("0.7".into()));
    form.apply(FormChange::Alpha("0.9".into()));
    assert_eq!(form.epsilon, "0.7");

    form.apply(FormChange::SameAlphaEpsilon(true));
    assert_eq!(form.epsilon, "0.9");
}

#[test]
fn test_switching_driver_relinks() {
    let mut form = FormState::default();
    form.apply(FormChange::ArchitectureDriver(ArchitectureDriver::Temp));

    assert_eq!(form.architecture_driver, ArchitectureDriver::Temp);
    assert_eq!(form.f_t, "0.50");
    assert_eq!(form.f_r, "3.9799");
}

#[test]
fn test_text_edits_are_sanitized() {
    let mut form = FormState::default();
    form.apply(FormChange::text(NumericField::InnerTemp, "1,200 K"));
    form.apply(FormChange::text(NumericField::LayerCount, "12 layers"));

    assert_eq!(form.t_inner, "1200");
    assert_eq!(form.n_max, "12e");
    assert_eq!(form.to_parameters().n_max, Some(12));
}

#[test]
fn test_reset_restores_defaults() {
    let mut form = FormState::default();
    form.apply(FormChange::LuminosityMethod(LuminosityMethod::Direct));
    form.apply(FormChange::ShowExergy(true));
    form.apply(FormChange::Alpha("0.3".into()));

    form.reset();
    assert_eq!(form, FormState::default());
}

// ========== Field State ==========

#[test]
fn test_stellar_fields_follow_luminosity_method() {
    let mut form = FormState::default();
    assert!(form.is_visible(NumericField::StarMass));
    assert!(!form.is_visible(NumericField::StarRadius));
    assert!(!form.is_visible(NumericField::StarLuminosity));

    form.apply(FormChange::LuminosityMethod(LuminosityMethod::RadiusTemp));
    assert!(form.is_visible(NumericField::StarRadius));
    assert!(form.is_visible(NumericField::StarTeff));
    assert!(!form.is_visible(NumericField::StarMass));

    form.apply(FormChange::LuminosityMethod(LuminosityMethod::Direct));
    assert!(form.is_visible(NumericField::StarLuminosity));
    assert!(!form.is_visible(NumericField::StarTeff));
}

#[test]
fn test_termination_field_follows_criterion() {
    let mut form = FormState::default();
    assert!(form.is_visible(NumericField::OuterTemp));
    assert!(!form.is_visible(NumericField::LayerCount));

    form.apply(FormChange::TerminationCriterion(TerminationCriterion::Layers));
    assert!(!form.is_visible(NumericField::OuterTemp));
    assert!(form.is_visible(NumericField::LayerCount));
}

#[test]
fn test_derived_fields_are_disabled() {
    let mut form = FormState::default();
    assert!(!form.is_enabled(NumericField::Epsilon));
    assert!(form.is_enabled(NumericField::RadiusFactor));
    assert!(!form.is_enabled(NumericField::TempFactor));
    assert!(form.is_enabled(NumericField::Alpha));

    form.apply(FormChange::SameAlphaEpsilon(false));
    form.apply(FormChange::ArchitectureDriver(ArchitectureDriver::Temp));
    assert!(form.is_enabled(NumericField::Epsilon));
    assert!(!form.is_enabled(NumericField::RadiusFactor));
    assert!(form.is_enabled(NumericField::TempFactor));
}

// ========== Coercion ==========

#[test]
fn test_default_form_matches_default_parameters() {
    assert_eq!(FormState::default().to_parameters(), InputParameters::default());
}

#[test]
fn test_unparsable_termination_inputs_become_missing() {
    let form = FormState {
        t_outer: String::new(),
        n_max: "2.5".into(),
        ..FormState::default()
    };
    let params = form.to_parameters();
    assert_eq!(params.t_outer, None);
    assert_eq!(params.n_max, None);

    let zero = FormState {
        t_outer: "0".into(),
        n_max: "0".into(),
        ..FormState::default()
    };
    let params = zero.to_parameters();
    assert_eq!(params.t_outer, Some(Temperature::from_kelvin(0.0)));
    assert_eq!(params.n_max, None);
}

#[test]
fn test_unparsable_numbers_are_nan() {
    let form = FormState {
        alpha: "".into(),
        star_mass: "-".into(),
        ..FormState::default()
    };
    let params = form.to_parameters();
    assert!(params.alpha.is_nan());
    assert!(params.star_mass.to_solar_masses().is_nan());
}

// ========== Serialization ==========

#[test]
fn test_form_change_wire_format() {
    let change: FormChange = serde_json::from_str(r#"{"field":"f_T","value":"0.4"}"#).unwrap();
    assert_eq!(change, FormChange::TempFactor("0.4".into()));

    let change: FormChange =
        serde_json::from_str(r#"{"field":"luminosityMethod","value":"radius_temp"}"#).unwrap();
    assert_eq!(change, FormChange::LuminosityMethod(LuminosityMethod::RadiusTemp));

    let change: FormChange =
        serde_json::from_str(r#"{"field":"showCarnot","value":true}"#).unwrap();
    assert_eq!(change, FormChange::ShowCarnot(true));
}

#[test]
fn test_form_state_wire_names() {
    let json = serde_json::to_value(FormState::default()).unwrap();
    assert_eq!(json["T_inner"], "1000");
    assert_eq!(json["f_T"], "0.50");
    assert_eq!(json["N_max"], "20");
    assert_eq!(json["sameAlphaEpsilon"], true);
    assert_eq!(json["architectureDriver"], "radius");
}
