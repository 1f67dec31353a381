//! Query-string value helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

/// A form value arrives as text; a JSON value may already be typed.
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Typed(T),
    Text(String),
}

/// Deserialize an optional value, treating an empty or whitespace-only
/// string as absent (`?ageGoe=` carries no constraint).
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Typed(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<T>().map(Some).map_err(|e| {
                de::Error::custom(format!("invalid value '{text}': {e}"))
            })
        }
    }
}
