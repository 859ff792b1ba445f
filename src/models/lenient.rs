//! Forgiving `deserialize_with` helpers.
//!
//! API documents are loosely typed: ids arrive as strings or numbers, and a
//! nested object may be missing or `null`. These helpers never fail on a
//! well-formed JSON value; anything of the wrong shape becomes the field's
//! default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Textual form of a scalar; `None` for null, arrays and objects.
pub(crate) fn text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text(value).unwrap_or_default())
}

pub(crate) fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text(value))
}

/// Builds a nested entity from an object, or its default from anything else.
pub(crate) fn from_object<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        T::default()
    }
}

pub(crate) fn model<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_object(value))
}

pub(crate) fn models<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(from_object).collect(),
        _ => Vec::new(),
    })
}
