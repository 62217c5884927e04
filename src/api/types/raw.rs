//! Numeric fields that are handed to the core unparsed
//!
//! Clients send rates and credit amounts either as JSON numbers or as
//! strings. Both are kept as text so the core decides what is malformed.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Deserialize a string or number field into its textual form
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(text) => text,
        RawValue::Integer(value) => value.to_string(),
        RawValue::Float(value) => value.to_string(),
    })
}
