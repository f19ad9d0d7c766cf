//! Operand coercion.
//!
//! Operands arrive as loosely typed JSON. A JSON number is taken as is. A
//! JSON string is trimmed and must parse in full as a finite decimal float;
//! partial prefixes like `"12abc"` are rejected rather than truncated.
//! Everything else (booleans, arrays, objects) is not a number.

use serde_json::Value;

/// Coerce a raw JSON value into a finite `f64`.
///
/// Returns `None` when the value is not numeric under the policy above.
pub fn parse_operand(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    }
}

/// Parse a numeric string. Rejects blanks, `NaN` and infinities.
pub fn parse_numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    // f64::from_str accepts "inf"/"nan" spellings; only plain literals count.
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
