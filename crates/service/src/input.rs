//! Loose JSON field coercion.
//!
//! Clients send numbers either as JSON numbers or as numeric strings
//! (`"price": "9.90"`); these helpers accept both and reject everything else.

use serde_json::Value;

/// `false` for absent, `null`, `false`, `0`, and `""`.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Non-empty string, or `None`.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Finite number from a JSON number or a numeric string.
pub fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Integer id (`1`, `"1"`, `1.0`); fractions and out-of-range values are rejected.
pub fn to_id(value: &Value) -> Option<i32> {
    let n = to_number(value)?;
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return None;
    }
    Some(n as i32)
}
