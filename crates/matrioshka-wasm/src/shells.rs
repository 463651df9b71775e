//! WASM bindings for shell computation and result rendering.

use wasm_bindgen::prelude::*;

use matrioshka::display::{summary_cards as display_summary_cards, ShellTable};
use matrioshka::{compute_shells as model_compute_shells, BrainProperties, InputParameters};

use crate::{from_js, to_js};

/// Compute the shells of a Matrioshka Brain.
///
/// # Arguments
/// * `params` - An `InputParameters` object; missing fields take their defaults
///
/// # Errors
/// Throws with the validation message (e.g. "Invalid physics parameters.")
/// when the parameters cannot produce a shell structure.
#[wasm_bindgen]
pub fn compute_shells(params: JsValue) -> Result<JsValue, JsError> {
    let params: InputParameters = from_js(params)?;
    let brain = model_compute_shells(&params).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&brain)
}

/// The reference parameters: a Sun-like star, 1000 K inner shell, shells down to 3 K.
#[wasm_bindgen]
pub fn default_parameters() -> Result<JsValue, JsError> {
    to_js(&InputParameters::default())
}

/// Render the shell table shown in the results panel.
///
/// Columns follow the `showCarnot`/`showLandauer`/`showExergy` flags of `params`.
#[wasm_bindgen]
pub fn render_table(result: JsValue, params: JsValue) -> Result<JsValue, JsError> {
    let brain: BrainProperties = from_js(result)?;
    let params: InputParameters = from_js(params)?;
    to_js(&ShellTable::new(&brain, &params))
}

/// Headline cards of the results panel.
#[wasm_bindgen]
pub fn summary_cards(result: JsValue) -> Result<JsValue, JsError> {
    let brain: BrainProperties = from_js(result)?;
    to_js(&display_summary_cards(&brain))
}
