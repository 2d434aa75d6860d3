//! Raw, not-yet-validated field values as they arrive from a source.

use std::num::FpCategory;

use serde_json::Value;

/// A field value before validation.
///
/// Source adapters convert whatever the upstream payload holds (JSON scalars,
/// XML text nodes, literal arguments) into a `RawValue` and hand it to a
/// validator. Nothing downstream of a validator ever sees one.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl RawValue {
    /// Generic text coercion. `Null` has no text form.
    ///
    /// Booleans read `True`/`False` and floats always carry a fractional part
    /// or an exponent (`3.0`, `1e+16`), so a float is never mistaken for an
    /// integer once it is text.
    #[must_use]
    pub fn coerce_text(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Bytes(b) => Some(String::from_utf8_lossy(b).into_owned()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(float_text(*f)),
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
            Self::Null => None,
        }
    }

    /// Integer coercion: integers pass, numeric strings parse (surrounding
    /// whitespace allowed), finite floats truncate toward zero, booleans are 0/1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coerce_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(s) => s.trim().parse().ok(),
            Self::Bytes(b) => std::str::from_utf8(b).ok()?.trim().parse().ok(),
            Self::Float(f) if f.is_finite() && f.abs() < INT_LIMIT => Some(f.trunc() as i64),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Float(_) | Self::Null => None,
        }
    }

    /// True when the value is a whole number that does not fit an `i64`: a
    /// string of digits too long to parse, or a finite float past the range.
    #[must_use]
    pub fn overflows_int(&self) -> bool {
        match self {
            Self::Str(s) => is_integer_literal(s) && s.trim().parse::<i64>().is_err(),
            Self::Bytes(b) => std::str::from_utf8(b)
                .is_ok_and(|s| is_integer_literal(s) && s.trim().parse::<i64>().is_err()),
            Self::Float(f) => f.is_finite() && f.abs() >= INT_LIMIT,
            _ => false,
        }
    }

    /// True for `Null` and for empty strings or byte strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            _ => false,
        }
    }
}

/// Floats at or past this magnitude do not truncate into an `i64`.
const INT_LIMIT: f64 = 9.2e18;

fn is_integer_literal(value: &str) -> bool {
    let value = value.trim();
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Shortest round-trip text of a float. Magnitudes in `1e-4..1e16` are
/// written positionally with at least one fractional digit; anything else
/// gets a signed, two-digit-minimum exponent.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if value.classify() == FpCategory::Zero || (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        return if text.contains('.') { text } else { format!("{text}.0") };
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => scientific,
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for RawValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<&[u8]> for RawValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for RawValue {
    fn from(value: &[u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for RawValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            Value::String(s) => Self::Str(s.clone()),
            // Composite values only reach a validator through text coercion.
            other => Self::Str(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_coercion() {
        assert_eq!(RawValue::from(100).coerce_text().as_deref(), Some("100"));
        assert_eq!(RawValue::from("spam").coerce_text().as_deref(), Some("spam"));
        assert_eq!(RawValue::Null.coerce_text(), None);
    }

    #[test]
    fn bool_and_float_text() {
        let cases = [
            (RawValue::from(true), "True", "true"),
            (RawValue::from(false), "False", "false"),
            (RawValue::from(3.0), "3.0", "whole float"),
            (RawValue::from(-0.0), "-0.0", "negative zero"),
            (RawValue::from(0.1), "0.1", "fraction"),
            (RawValue::from(3_095_555_555.0), "3095555555.0", "phone-sized float"),
            (RawValue::from(1e16), "1e+16", "large exponent"),
            (RawValue::from(1.5e-7), "1.5e-07", "small exponent"),
            (RawValue::from(1e-4), "0.0001", "smallest positional"),
            (RawValue::from(f64::NAN), "nan", "nan"),
            (RawValue::from(f64::NEG_INFINITY), "-inf", "negative infinity"),
        ];

        for (raw, expected, desc) in cases {
            assert_eq!(raw.coerce_text().as_deref(), Some(expected), "case '{desc}'");
        }
    }

    #[test]
    fn int_coercion() {
        let cases = [
            (RawValue::from(10), Some(10), "integer"),
            (RawValue::from("10"), Some(10), "numeric string"),
            (RawValue::from(" 10 "), Some(10), "padded string"),
            (RawValue::from(3.7), Some(3), "float truncates"),
            (RawValue::from(true), Some(1), "bool"),
            (RawValue::from("two"), None, "word"),
            (RawValue::from(f64::NAN), None, "nan"),
            (RawValue::Null, None, "null"),
        ];

        for (raw, expected, desc) in cases {
            assert_eq!(raw.coerce_int(), expected, "case '{desc}'");
        }
    }

    #[test]
    fn int_overflow() {
        let cases = [
            (RawValue::from("99999999999999999999"), true, "long digit string"),
            (RawValue::from(" -99999999999999999999 "), true, "padded negative"),
            (RawValue::from(b"99999999999999999999"), true, "long digit bytes"),
            (RawValue::from(1e19), true, "large float"),
            (RawValue::from("9223372036854775807"), false, "i64 max"),
            (RawValue::from("1e19"), false, "exponent string"),
            (RawValue::from("two"), false, "word"),
            (RawValue::from(f64::INFINITY), false, "infinity"),
            (RawValue::Null, false, "null"),
        ];

        for (raw, expected, desc) in cases {
            assert_eq!(raw.overflows_int(), expected, "case '{desc}'");
        }
    }

    #[test]
    fn from_json_scalars() {
        assert_eq!(RawValue::from(&json!("IL")), RawValue::from("IL"));
        assert_eq!(RawValue::from(&json!(13)), RawValue::Int(13));
        assert_eq!(RawValue::from(&json!(null)), RawValue::Null);
        assert_eq!(RawValue::from(&json!(1.5)), RawValue::Float(1.5));
    }

    #[test]
    fn emptiness() {
        assert!(RawValue::Null.is_empty());
        assert!(RawValue::from("").is_empty());
        assert!(!RawValue::from(0).is_empty());
        assert!(RawValue::from(None::<&str>).is_empty());
    }
}
