//! Field validators for investment submissions
//!
//! Raw fields arrive as untyped JSON values. These helpers decide presence,
//! parse amounts and check phone numbers without touching anything else.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Number, Value};

use super::{AmountIssue, ValidationError};

lazy_static! {
    /// ASCII digits only: no spaces, hyphens or leading '+'
    static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();

    /// Longest leading decimal literal, optionally signed, or an infinity
    static ref FLOAT_PREFIX_REGEX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// A field counts as present unless it is missing, `null`, `false`, `0` or `""`.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => number_of(n).map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Validate that a field is present, naming it on failure
pub fn validate_required<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    match value {
        Some(v) if is_present(value) => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Numeric value of a JSON number. Literals beyond the f64 range come back
/// as infinities instead of `None`.
fn number_of(n: &Number) -> Option<f64> {
    n.as_f64().or_else(|| n.to_string().parse::<f64>().ok())
}

/// Textual form of a scalar field as it is echoed back to the client.
///
/// Whole numbers print without a fractional part or exponent, so the phone
/// `7.7e8` reads `770000000`.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match number_of(n) {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) if f.is_finite() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Parse the leading float literal of a string.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `" 12.5 FCFA"`
/// yields 12.5. Returns `None` when no numeric prefix exists.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let literal = FLOAT_PREFIX_REGEX.find(trimmed)?.as_str();
    literal.parse::<f64>().ok()
}

/// Parse an amount sent either as a JSON number or as a string.
pub fn parse_amount(value: &Value) -> Result<f64, ValidationError> {
    let amount = match value {
        Value::Number(n) => number_of(n),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
    .filter(|f| !f.is_nan())
    .ok_or(ValidationError::InvalidAmount(AmountIssue::NotANumber))?;

    validate_positive_amount(amount)?;
    Ok(amount)
}

/// Amount must be finite and strictly positive
pub fn validate_positive_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(AmountIssue::NotFinite));
    }
    if amount <= 0.0 {
        return Err(ValidationError::InvalidAmount(AmountIssue::NotPositive));
    }
    Ok(())
}

/// Phone must consist exclusively of decimal digits
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !DIGITS_REGEX.is_match(phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}
