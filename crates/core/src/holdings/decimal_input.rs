//! Lenient deserializers for user-entered numbers.
//!
//! Persisted snapshots and edit payloads may carry numbers as JSON numbers,
//! as strings (with either `.` or `,` as decimal separator) or as garbage.
//! Non-numeric input degrades to zero (or `None` for optional fields) instead
//! of failing the whole record. Magnitudes are capped at `MAX_AMOUNT`.
//!
//! Persisted amounts are written as strings so they round-trip exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use std::str::FromStr;

use crate::constants::MAX_AMOUNT;
use crate::errors::{Result, ValidationError};

/// Parses a user-entered decimal, accepting a comma as decimal separator.
pub fn parse_decimal_input(value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("number".to_string()).into());
    }
    // "1.234,56" (pt-BR) and "1,234.56" (en-US) both resolve to 1234.56
    let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (Some(_), None) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|e| ValidationError::DecimalParse(e).into())
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal_input(&n.to_string()).ok(),
        Value::String(s) => parse_decimal_input(s).ok(),
        _ => None,
    }
}

/// Clamps an amount into `0..=MAX_AMOUNT`.
pub fn clamp_amount(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(MAX_AMOUNT)
}

/// Drops negative values and caps the rest at `MAX_AMOUNT`.
pub fn clamp_optional_amount(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v >= Decimal::ZERO).map(|v| v.min(MAX_AMOUNT))
}

/// Caps a signed figure (EPS, book value) into `-MAX_AMOUNT..=MAX_AMOUNT`.
pub fn clamp_signed(value: Decimal) -> Decimal {
    value.max(-MAX_AMOUNT).min(MAX_AMOUNT)
}

pub fn non_negative<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&raw)
        .map(clamp_amount)
        .unwrap_or(Decimal::ZERO))
}

pub fn optional<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&raw).map(clamp_signed))
}

pub fn optional_non_negative<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(clamp_optional_amount(decimal_from_value(&raw)))
}

pub fn non_negative_list<'de, D>(deserializer: D) -> std::result::Result<Vec<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                decimal_from_value(item)
                    .map(clamp_amount)
                    .unwrap_or(Decimal::ZERO)
            })
            .collect(),
        _ => Vec::new(),
    })
}

pub fn serialize_list<S>(values: &[Decimal], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(|value| value.to_string()))
}
