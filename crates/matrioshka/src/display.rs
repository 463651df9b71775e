//! Text rendering of computed brains for the results panel.

use serde::Serialize;

use crate::params::InputParameters;
use crate::shell_model::{BrainProperties, Shell};

/// Placeholder for a metric that does not apply to a shell
pub const MISSING: &str = "–";

/// Digits after the decimal point needed to print any `f64` exactly
const EXACT_DIGITS: usize = 1100;

/// Most decimals either notation will produce
pub const MAX_DIGITS: usize = 100;

/// Fixed-point notation with `digits` decimals, rounding halves away from zero.
///
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
pub fn fixed(value: f64, digits: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let digits = digits.min(MAX_DIGITS);
    let (int_part, frac_part) = exact_decimal(value);

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(digits)).collect();
    if frac_part.as_bytes()[digits] >= b'5' && round_up(&mut kept) {
        kept.insert(0, b'1');
    }
    let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);

    let mut text = String::from(sign(value));
    text.extend(int_digits.iter().map(|&b| char::from(b)));
    if digits > 0 {
        text.push('.');
        text.extend(frac_digits.iter().map(|&b| char::from(b)));
    }
    text
}

/// Scientific notation with `digits` decimals and a signed exponent, e.g. `3.83e+26`.
///
/// Halves round away from zero.
pub fn exponential(value: f64, digits: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let digits = digits.min(MAX_DIGITS);
    let (int_part, frac_part) = exact_decimal(value);
    let all: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();

    let (mut mantissa, mut exponent) = match all.iter().position(|&b| b != b'0') {
        Some(first) => {
            let mut mantissa = all[first..first + digits + 1].to_vec();
            if all[first + digits + 1] >= b'5' && round_up(&mut mantissa) {
                mantissa.insert(0, b'1');
            }
            (mantissa, int_part.len() as i64 - 1 - first as i64)
        }
        None => (vec![b'0'; digits + 1], 0),
    };
    if mantissa.len() > digits + 1 {
        mantissa.truncate(digits + 1);
        exponent += 1;
    }

    let mut text = String::from(sign(value));
    text.push(char::from(mantissa[0]));
    if digits > 0 {
        text.push('.');
        text.extend(mantissa[1..].iter().map(|&b| char::from(b)));
    }
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    text.push_str(&format!("e{exponent_sign}{}", exponent.abs()));
    text
}

/// Exact decimal expansion of `|value|`, split at the decimal point.
fn exact_decimal(value: f64) -> (String, String) {
    let text = format!("{:.*}", EXACT_DIGITS, value.abs());
    match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, "0".repeat(EXACT_DIGITS)),
    }
}

/// Add one unit in the last place of an ASCII digit string.
///
/// Returns true when the carry runs off the front, leaving all zeros.
fn round_up(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

fn sign(value: f64) -> &'static str {
    if value < 0.0 {
        "-"
    } else {
        ""
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Shell temperature in kelvin; anything that rounds to zero is shown as `~0.00`.
pub fn temperature_cell(kelvin: f64) -> String {
    let text = fixed(kelvin, 2);
    if text == "0.00" {
        "~0.00".to_string()
    } else {
        text
    }
}

/// Shell radius in AU, switching to scientific notation from 1000 AU.
pub fn radius_cell(au: f64) -> String {
    if au < 1000.0 {
        fixed(au, 2)
    } else {
        exponential(au, 2)
    }
}

fn metric_cell(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => format(v),
        _ => MISSING.to_string(),
    }
}

/// One rendered row of the shell table
///
/// Optional columns are `None` when the metric was not requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellRow {
    pub label: String,
    pub radius_au: String,
    pub temperature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carnot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landauer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exergy: Option<String>,
}

/// Rendered shell table with headers matching the requested columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<ShellRow>,
}

impl ShellTable {
    pub fn new(brain: &BrainProperties, params: &InputParameters) -> Self {
        let mut headers = vec!["Shell", "Radius (AU)", "Temp (K)"];
        if params.show_carnot {
            headers.push("Carnot η");
        }
        if params.show_landauer {
            headers.push("Landauer (J)");
        }
        if params.show_exergy {
            headers.push("Exergy (W)");
        }

        let rows = brain
            .shell_details
            .iter()
            .map(|shell| ShellRow::new(shell, params))
            .collect();

        Self { headers, rows }
    }
}

impl ShellRow {
    pub fn new(shell: &Shell, params: &InputParameters) -> Self {
        Self {
            label: format!("#{}", shell.layer + 1),
            radius_au: radius_cell(shell.radius_au),
            temperature: temperature_cell(shell.equilibrium_temp),
            carnot: params
                .show_carnot
                .then(|| metric_cell(shell.carnot, |v| fixed(v, 2))),
            landauer: params
                .show_landauer
                .then(|| metric_cell(shell.landauer, |v| exponential(v, 2))),
            exergy: params
                .show_exergy
                .then(|| metric_cell(shell.exergy, |v| exponential(v, 2))),
        }
    }
}

/// Headline figure of the results panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Total layers, luminosity, inner radius and throughput, in display order.
pub fn summary_cards(brain: &BrainProperties) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            label: "Total Calculated Layers",
            value: fixed(brain.total_layers as f64, 0),
            unit: "",
        },
        SummaryCard {
            label: "Stellar Luminosity",
            value: exponential(brain.calculated_luminosity.to_watts(), 2),
            unit: "Watts",
        },
        SummaryCard {
            label: "Inner Shell Radius",
            value: fixed(brain.inner_shell_radius_au, 3),
            unit: "AU",
        },
        SummaryCard {
            label: "Total Throughput",
            value: exponential(brain.total_throughput, 2),
            unit: "bits/s",
        },
    ]
}
