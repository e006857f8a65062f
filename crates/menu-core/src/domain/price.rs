//! Price value as it arrives over the wire

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw price value. The backend may send a number or a numeric string, so the
/// original JSON value is kept and coerced on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Value);

impl Price {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Numeric coercion: numbers pass through, strings are trimmed and parsed
    /// (a blank string is zero), booleans are 1 or 0, null is zero. Arrays and
    /// objects have no numeric value. An absent price never reaches this; see
    /// [`MenuItem::price`](super::MenuItem::price).
    pub fn coerce(&self) -> Option<f64> {
        match &self.0 {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null => Some(0.0),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn finite(&self) -> Option<f64> {
        self.coerce().filter(|n| n.is_finite())
    }

    /// Public menu form: `"25 kr"`, or an empty string when not a finite number.
    pub fn display(&self, currency_suffix: &str) -> String {
        match self.finite() {
            Some(n) => format!("{} {}", format_number(n), currency_suffix),
            None => String::new(),
        }
    }

    /// Admin list form: the number when finite, otherwise the raw value as text.
    pub fn display_or_raw(&self) -> String {
        match (self.finite(), &self.0) {
            (Some(n), _) => format_number(n),
            (None, Value::String(s)) => s.clone(),
            (None, other) => other.to_string(),
        }
    }
}

/// Shortest decimal form, without a trailing `.0` and without negative zero.
/// Magnitudes from `1e21` up and below `1e-6` use exponent notation with an
/// explicit sign, e.g. `1e+21` and `1.5e-7`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce() {
        assert_eq!(Price::new(25).coerce(), Some(25.0));
        assert_eq!(Price::new("20").coerce(), Some(20.0));
        assert_eq!(Price::new(" 12.5 ").coerce(), Some(12.5));
        assert_eq!(Price::new("").coerce(), Some(0.0));
        assert_eq!(Price::new(true).coerce(), Some(1.0));
        assert_eq!(Price::new("abc").coerce(), None);
        assert_eq!(Price(Value::Null).coerce(), Some(0.0));
        assert_eq!(Price(json!([1])).coerce(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(25).display("kr"), "25 kr");
        assert_eq!(Price::new("20").display("kr"), "20 kr");
        assert_eq!(Price::new(19.5).display("kr"), "19.5 kr");
        assert_eq!(Price::new("abc").display("kr"), "");
        assert_eq!(Price::new("Infinity").display("kr"), "");
        assert_eq!(Price(json!({})).display("kr"), "");
    }

    #[test]
    fn test_null_displays_as_zero() {
        assert_eq!(Price(Value::Null).display("kr"), "0 kr");
        assert_eq!(Price(Value::Null).display_or_raw(), "0");
    }

    #[test]
    fn test_display_or_raw() {
        assert_eq!(Price::new("45").display_or_raw(), "45");
        assert_eq!(Price::new("gratis").display_or_raw(), "gratis");
        assert_eq!(Price(json!([1, 2])).display_or_raw(), "[1,2]");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(123456.0), "123456");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_number_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(-2e22), "-2e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(Price::new(1e21).display("kr"), "1e+21 kr");
    }
}
