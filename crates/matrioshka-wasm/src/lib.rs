//! WASM bindings for the Matrioshka Brain shell model.
//!
//! This crate exposes the shell computation and the brain builder form to
//! JavaScript/TypeScript using `wasm-bindgen` and `serde-wasm-bindgen`.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, {
//!     default_form,
//!     apply_form_change,
//!     form_to_parameters,
//!     compute_shells,
//!     render_table,
//! } from 'matrioshka-wasm';
//!
//! await init();
//!
//! let form = default_form();
//! form = apply_form_change(form, { field: "f_T", value: "0.6" });
//!
//! const params = form_to_parameters(form);
//! try {
//!     const brain = compute_shells(params);
//!     console.log(`${brain.totalLayers} shells`, render_table(brain, params));
//! } catch (e) {
//!     console.error(e.message); // e.g. "Invalid outer temperature."
//! }
//! ```

use wasm_bindgen::prelude::*;

mod form;
mod shells;

// Type aliases for unit types (serialized as numbers via serde(transparent))
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Mass in solar masses (M☉) */
export type Mass = number;
/** Length in meters */
export type Length = number;
/** Temperature in Kelvin */
export type Temperature = number;
/** Luminosity in Watts */
export type Luminosity = number;
"#;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
