//! Lenient deserializers for OpenAlgo payloads
//!
//! Brokers behind OpenAlgo disagree on whether prices and quantities are JSON
//! numbers or strings (`"18083.01"`, `"0"`, `""`). These helpers coerce either
//! form so display code can work with plain numbers.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim().replace(',', "");
            if s.is_empty() { None } else { s.parse::<f64>().ok() }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .ok()
            .or_else(|| value_as_f64(value).filter(|f| *f >= 0.0).map(|f| f as u64)),
        _ => None,
    }
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| value_as_f64(value).map(|f| f as i64)),
        _ => None,
    }
}

/// Deserializes a number or numeric string into `f64`, rejecting anything else
pub fn number_or_string_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_f64(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a number, got {value}")))
}

/// Deserializes a non-negative number or numeric string into `u64`
pub fn number_or_string_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_u64(&value)
        .ok_or_else(|| D::Error::custom(format!("expected an unsigned integer, got {value}")))
}

/// Deserializes a number or numeric string into `i64`
pub fn number_or_string_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_i64(&value)
        .ok_or_else(|| D::Error::custom(format!("expected an integer, got {value}")))
}

/// Deserializes a number or numeric string into `Option<u64>`
///
/// `null` and empty strings become `None`.
pub fn string_as_u64_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_u64))
}

/// Deserializes `null` as an empty vector
pub fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a number or numeric string into `Option<f64>`
///
/// `null`, empty strings and unparsable strings become `None`.
pub fn string_as_float_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Deserializes a number or numeric string into `f64`, defaulting to `0.0`
pub fn string_as_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_as_float_opt(deserializer)?.unwrap_or_default())
}

/// Deserializes a number or numeric string into `Option<i64>`
///
/// Fractional values such as `"75.0"` are truncated.
pub fn string_as_int_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        other => value_as_f64(other).map(|f| f as i64),
    }))
}

/// Deserializes a string or number into `Option<String>`
///
/// Order ids are strings for most brokers and integers for a few.
pub fn number_as_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Deserializes a boolean given as `true`, `"true"`, `"1"` or `1`
pub fn string_as_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Formats an optional number for table cells, `-` when absent
#[must_use]
pub fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "-".to_string())
}

/// Formats an optional string for table cells, `-` when absent
#[must_use]
pub fn fmt_opt_str(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
