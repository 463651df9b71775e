//! Integration tests driving the shell model the way the browser client does:
//! edit the form, coerce it into parameters, compute, and render.

use matrioshka::display::{summary_cards, ShellTable};
use matrioshka::{
    compute_shells, ArchitectureDriver, FormChange, FormState, LuminosityMethod, NumericField,
    TerminationCriterion, ValidationError,
};

#[test]
fn default_form_builds_sun_to_cmb_brain() {
    let form = FormState::default();
    let params = form.to_parameters();
    let brain = compute_shells(&params).expect("default form should be valid");

    println!("\n=== Default Brain ===");
    for card in summary_cards(&brain) {
        println!("{}: {} {}", card.label, card.value, card.unit);
    }

    assert_eq!(brain.total_layers, 10);
    assert_eq!(brain.warnings.len(), 1);

    let outer = brain.outermost().unwrap();
    assert!(outer.equilibrium_temp <= 3.0);
    assert!(brain.shell_details[brain.total_layers - 2].equilibrium_temp > 3.0);
}

#[test]
fn linked_factors_keep_shells_physically_consistent() {
    let mut form = FormState::default();
    form.apply(FormChange::SameAlphaEpsilon(true));
    form.apply(FormChange::ArchitectureDriver(ArchitectureDriver::Temp));
    form.apply(FormChange::text(NumericField::TempFactor, "0.6"));
    form.apply(FormChange::TerminationCriterion(TerminationCriterion::Layers));
    form.apply(FormChange::text(NumericField::LayerCount, "6"));

    let params = form.to_parameters();
    let brain = compute_shells(&params).unwrap();
    assert_eq!(brain.total_layers, 6);

    // With α = ε every shell obeys r ∝ T⁻², so f_r ≈ 1 / f_T² up to the
    // four decimals kept in the form
    for pair in brain.shell_details.windows(2) {
        let radius_ratio = pair[1].radius_meters / pair[0].radius_meters;
        let temp_ratio = pair[1].equilibrium_temp / pair[0].equilibrium_temp;
        let implied = params.alpha.sqrt() / (temp_ratio * temp_ratio);
        assert!(
            (radius_ratio - implied).abs() < 1e-3,
            "radius ratio {radius_ratio} should match linked factor {implied}"
        );
    }
}

#[test]
fn radius_temperature_method_with_all_columns() {
    let mut form = FormState::default();
    form.apply(FormChange::LuminosityMethod(LuminosityMethod::RadiusTemp));
    form.apply(FormChange::text(NumericField::StarRadius, "1.392e9"));
    form.apply(FormChange::text(NumericField::StarTeff, "4000"));
    form.apply(FormChange::ShowCarnot(true));
    form.apply(FormChange::ShowExergy(true));
    form.apply(FormChange::text(NumericField::OuterTemp, "20"));

    let params = form.to_parameters();
    let brain = compute_shells(&params).unwrap();
    assert!(brain.warnings.is_empty());

    let table = ShellTable::new(&brain, &params);
    assert_eq!(table.headers.len(), 6);

    let last = table.rows.last().unwrap();
    assert_eq!(last.carnot.as_deref(), Some("–"));
    assert_eq!(last.exergy.as_deref(), Some("–"));
    assert!(table.rows[0].exergy.as_deref().unwrap().contains("e+"));
}

#[test]
fn invalid_edits_surface_validation_messages() {
    let mut form = FormState::default();
    form.apply(FormChange::text(NumericField::OuterTemp, "5000"));
    let err = compute_shells(&form.to_parameters()).unwrap_err();
    assert_eq!(err, ValidationError::InvalidOuterTemperature);

    form.reset();
    form.apply(FormChange::TerminationCriterion(TerminationCriterion::Layers));
    form.apply(FormChange::text(NumericField::LayerCount, "none"));
    let err = compute_shells(&form.to_parameters()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid number of layers.");

    form.reset();
    form.apply(FormChange::text(NumericField::Alpha, "1.5"));
    let err = compute_shells(&form.to_parameters()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid physics parameters.");

    form.reset();
    form.apply(FormChange::LuminosityMethod(LuminosityMethod::Direct));
    form.apply(FormChange::text(NumericField::StarLuminosity, "-"));
    let err = compute_shells(&form.to_parameters()).unwrap_err();
    assert_eq!(err.to_string(), "Could not calculate a positive stellar luminosity.");
}
