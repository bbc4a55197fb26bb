//! Metric value coercion
//!
//! Converts an extracted capture into the metric family's advertised result
//! type: an unsigned counter, a 0/1 probe flag, or the raw body untouched.

use std::fmt;

use serde::Serialize;

use crate::error::CoerceError;
use crate::probe::family::Coercion;

/// Ping probe token that maps to 1; every other capture maps to 0
const SUCCESS_TOKEN: &str = "SUCCESS";

/// Final value of one probe invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Unsigned integer counter
    Counter(u64),
    /// Raw string (the `.json` passthrough families)
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Counter(n) => write!(f, "{}", n),
            MetricValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Coerce an extracted capture according to the family's rule.
///
/// `Coercion::Passthrough` returns the input unchanged; for passthrough
/// families the dispatcher normally short-circuits with the raw body before
/// extraction ever runs.
pub fn coerce(capture: &str, rule: Coercion) -> Result<MetricValue, CoerceError> {
    match rule {
        Coercion::SuccessToken => {
            let value = if capture == SUCCESS_TOKEN { 1 } else { 0 };
            Ok(MetricValue::Counter(value))
        }
        Coercion::Counter => {
            // Signed parse passed through unclamped; request counters are
            // never negative in practice.
            let parsed = parse_leading_i64(capture).ok_or_else(|| CoerceError::NotNumeric {
                capture: capture.to_string(),
            })?;
            Ok(MetricValue::Counter(parsed as u64))
        }
        Coercion::CounterClamped => {
            let parsed = parse_leading_i64(capture).ok_or_else(|| CoerceError::NotNumeric {
                capture: capture.to_string(),
            })?;
            Ok(MetricValue::Counter(parsed.max(0) as u64))
        }
        Coercion::Passthrough => Ok(MetricValue::Text(capture.to_string())),
    }
}

/// Permissive leading-numeric parse.
///
/// Skips leading whitespace, accepts an optional sign, then consumes digits
/// until the first non-digit. Returns `None` when no digit was consumed at
/// all; saturates instead of overflowing.
pub fn parse_leading_i64(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let mut chars = s.chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    // Accumulate in the negative range so i64::MIN stays representable.
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in chars {
        let Some(digit) = c.to_digit(10) else { break };
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_sub(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }

    Some(if negative {
        value
    } else {
        value.checked_neg().unwrap_or(i64::MAX)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_plain() {
        assert_eq!(parse_leading_i64("42"), Some(42));
        assert_eq!(parse_leading_i64("0"), Some(0));
        assert_eq!(parse_leading_i64("-5"), Some(-5));
        assert_eq!(parse_leading_i64("+17"), Some(17));
    }

    #[test]
    fn test_parse_leading_stops_at_non_digit() {
        assert_eq!(parse_leading_i64("42ms"), Some(42));
        assert_eq!(parse_leading_i64("7.5"), Some(7));
        assert_eq!(parse_leading_i64("  19 "), Some(19));
    }

    #[test]
    fn test_parse_leading_total_failure() {
        assert_eq!(parse_leading_i64(""), None);
        assert_eq!(parse_leading_i64("n/a"), None);
        assert_eq!(parse_leading_i64("-"), None);
        assert_eq!(parse_leading_i64("ms42"), None);
    }

    #[test]
    fn test_parse_leading_saturates() {
        assert_eq!(
            parse_leading_i64("99999999999999999999999"),
            Some(i64::MAX)
        );
        assert_eq!(
            parse_leading_i64("-99999999999999999999999"),
            Some(i64::MIN)
        );
    }

    #[test]
    fn test_success_token() {
        assert_eq!(
            coerce("SUCCESS", Coercion::SuccessToken).unwrap(),
            MetricValue::Counter(1)
        );
        assert_eq!(
            coerce("FAILED", Coercion::SuccessToken).unwrap(),
            MetricValue::Counter(0)
        );
        // Case-sensitive comparison
        assert_eq!(
            coerce("success", Coercion::SuccessToken).unwrap(),
            MetricValue::Counter(0)
        );
        assert_eq!(
            coerce("", Coercion::SuccessToken).unwrap(),
            MetricValue::Counter(0)
        );
    }

    #[test]
    fn test_counter() {
        assert_eq!(coerce("42", Coercion::Counter).unwrap(), MetricValue::Counter(42));
        assert_eq!(coerce("0", Coercion::Counter).unwrap(), MetricValue::Counter(0));
    }

    #[test]
    fn test_counter_not_numeric() {
        let err = coerce("n/a", Coercion::Counter).unwrap_err();
        assert!(err.to_string().contains("n/a"));
    }

    #[test]
    fn test_clamped_counter() {
        assert_eq!(
            coerce("-5", Coercion::CounterClamped).unwrap(),
            MetricValue::Counter(0)
        );
        assert_eq!(
            coerce("7", Coercion::CounterClamped).unwrap(),
            MetricValue::Counter(7)
        );
        assert_eq!(
            coerce("0", Coercion::CounterClamped).unwrap(),
            MetricValue::Counter(0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MetricValue::Counter(42).to_string(), "42");
        assert_eq!(
            MetricValue::Text("{\"a\":1}".to_string()).to_string(),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&MetricValue::Counter(7)).unwrap(),
            "7"
        );
        assert_eq!(
            serde_json::to_string(&MetricValue::Text("ok".to_string())).unwrap(),
            "\"ok\""
        );
    }
}
