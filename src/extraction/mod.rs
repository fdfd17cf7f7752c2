//! Free-text mining of diagnostic narratives.
//!
//! Given a narrative like `"paciente pesa 70 quilos altura 1 m 70 cm
//! sintomas febre tosse"`, produces a report with best-effort weight,
//! height and symptom fields recognized near fixed keyword lists.
//!
//! The whole module is a pure function of its input string: no I/O, no
//! shared state, identical input always yields identical output.

mod normalize;
mod scan;

pub use normalize::{fold_token, tokenize};
pub use scan::{scan_after, scan_before, TokenValue};

use serde::Serialize;

/// Weight keywords: a numeric value is expected before these.
const WEIGHT_KEYWORDS: &[&str] = &["peso", "quilos", "quilograma", "kg"];

/// Height keywords, meters component.
const HEIGHT_METER_KEYWORDS: &[&str] = &["metros", "m"];

/// Height keywords, centimeters component.
const HEIGHT_CM_KEYWORDS: &[&str] = &["centimetros", "cm"];

/// Symptom keywords: the symptom token is expected after these.
const SYMPTOM_KEYWORDS: &[&str] = &["sintomas", "sintoma"];

/// Fixed payload returned when a report cannot be produced.
pub const INCORRECT_PARAMETER: &str = "{\"error\":\"Incorrect parameter\"}";

/// Structured extraction result for one narrative.
///
/// Constructed fresh per request, serialized, then discarded. Field
/// declaration order is the serialization order.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    /// Weight in kilograms, when a number precedes a weight keyword.
    pub weight: Option<f64>,
    /// Height in centimeters. Missing components contribute zero, so an
    /// unmatched height still renders as `0`.
    pub height: f64,
    /// First token following a symptom keyword, verbatim.
    pub symptoms: Option<String>,
    /// The input narrative, always echoed unmodified.
    pub full_text: String,
}

/// Mine a narrative for weight, height and symptom mentions.
pub fn analyze(text: &str) -> DiagnosticReport {
    let tokens = tokenize(text);

    let weight: Option<f64> = scan_before(&tokens, WEIGHT_KEYWORDS);
    let height_m: Option<f64> = scan_before(&tokens, HEIGHT_METER_KEYWORDS);
    let height_cm: Option<f64> = scan_before(&tokens, HEIGHT_CM_KEYWORDS);
    let symptoms: Option<String> = scan_after(&tokens, SYMPTOM_KEYWORDS);

    // Meters convert to centimeters; a missing component contributes zero.
    let height = height_m.unwrap_or(0.0) * 100.0 + height_cm.unwrap_or(0.0);

    DiagnosticReport {
        weight,
        height,
        symptoms,
        full_text: text.to_string(),
    }
}

/// Analyze a narrative and serialize the report as pretty-printed JSON.
///
/// Serialization failure is caught locally: the fixed error payload comes
/// back instead of a fault.
pub fn process_text(text: &str) -> String {
    let report = analyze(text);

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to serialize diagnostic report");
        INCORRECT_PARAMETER.to_string()
    })
}
