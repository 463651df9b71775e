//! WASM bindings for the brain builder form.

use wasm_bindgen::prelude::*;

use matrioshka::{FormChange, FormState};

use crate::{from_js, to_js};

/// The initial state of the form.
#[wasm_bindgen]
pub fn default_form() -> Result<JsValue, JsError> {
    to_js(&FormState::default())
}

/// Apply one edit to the form and return the updated state.
///
/// # Arguments
/// * `form` - Current `FormState`
/// * `change` - A `{ field, value }` edit, e.g. `{ field: "alpha", value: "0.9" }`
#[wasm_bindgen]
pub fn apply_form_change(form: JsValue, change: JsValue) -> Result<JsValue, JsError> {
    let mut form: FormState = from_js(form)?;
    let change: FormChange = from_js(change)?;
    form.apply(change);
    to_js(&form)
}

/// Coerce the form text into `InputParameters` for `compute_shells`.
#[wasm_bindgen]
pub fn form_to_parameters(form: JsValue) -> Result<JsValue, JsError> {
    let form: FormState = from_js(form)?;
    to_js(&form.to_parameters())
}
