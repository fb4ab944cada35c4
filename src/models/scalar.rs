//! Lenient decoding of displayed record fields
//!
//! Records are rendered by interpolating their fields, so any JSON scalar is
//! acceptable where text is expected. A number or boolean keeps its JSON
//! spelling; `null` reads as an absent field.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize any JSON value into its display text
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }))
}
