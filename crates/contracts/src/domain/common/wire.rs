//! Lenient deserializers for fields the backend sends in more than one shape.
//!
//! Prices and counts arrive as numbers, numeric strings, empty strings or
//! null depending on which form last saved the record. They are normalized
//! here once so the rest of the code only ever sees `Option<T>`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a human-entered number: `"$1,200.50"`, `" 3 "`, `"1200"`.
/// Returns `None` for blank or non-numeric input.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// `Option<f64>` from number | string | null | missing
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// `Option<u32>` from number | string | null | missing; fractional or
/// negative values are treated as absent.
pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_f64)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32))
}

/// `Option<String>` where blank strings count as absent
pub fn opt_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "opt_u32")]
        bedrooms: Option<u32>,
        #[serde(default, deserialize_with = "opt_non_empty")]
        note: Option<String>,
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("$1,200.50"), Some(1200.5));
        assert_eq!(parse_number(" 3 "), Some(3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("call us"), None);
    }

    #[test]
    fn test_price_shapes() {
        let p: Probe = serde_json::from_str(r#"{"price": "950"}"#).unwrap();
        assert_eq!(p.price, Some(950.0));
        let p: Probe = serde_json::from_str(r#"{"price": 950}"#).unwrap();
        assert_eq!(p.price, Some(950.0));
        let p: Probe = serde_json::from_str(r#"{"price": ""}"#).unwrap();
        assert_eq!(p.price, None);
        let p: Probe = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert_eq!(p.price, None);
        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.price, None);
    }

    #[test]
    fn test_counts_and_strings() {
        let p: Probe = serde_json::from_str(r#"{"bedrooms": "3", "note": "  "}"#).unwrap();
        assert_eq!(p.bedrooms, Some(3));
        assert_eq!(p.note, None);
        let p: Probe = serde_json::from_str(r#"{"bedrooms": 2.5}"#).unwrap();
        assert_eq!(p.bedrooms, None);
    }
}
