//! Lenient deserializers for spreadsheet cells.
//!
//! The spreadsheet API returns whatever the sheet holds: numbers, numeric
//! strings, empty strings, booleans or nothing at all. These helpers are
//! used with `#[serde(deserialize_with = ...)]` so that a record always
//! decodes, with unusable cells collapsing to `None`.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text cell; numbers and booleans are stringified, blanks become `None`.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| value_to_string(&v)))
}

/// Text cell that is always present in the row; blanks become `""`.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

/// Money cell. Accepts `12.5`, `"12.50"` and `"$1,234.00"`.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails.
pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_decimal))
}

/// Money cell that defaults to zero.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_decimal(deserializer)?.unwrap_or_default())
}

/// Whole-number cell. Fractional values are truncated toward zero.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

/// Whole-number cell that defaults to zero.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_int(deserializer)?.unwrap_or_default())
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | ' '))
                .collect();
            parse_decimal(&cleaned)
        }
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            #[allow(clippy::cast_possible_truncation)] // Stock counts are far below i64::MAX
            n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                parse_decimal(trimmed).and_then(|d| d.trunc().to_i64())
            })
        }
        _ => None,
    }
}
