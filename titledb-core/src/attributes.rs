//! Per-release metadata records as published in a title database.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Metadata for one base title, update or DLC.
///
/// Wire names are camelCase. Missing and `null` fields both decode to the
/// field's zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAttributes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: TitleVersion,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    /// Raw `YYYYMMDD` integer, or a sentinel such as 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: i64,
    /// `release_date` rendered for display. Filled in once at ingestion,
    /// never read from the wire.
    #[serde(default, skip_deserializing)]
    pub parsed_release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub screenshots: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub banner_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Size in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u64,
}

impl TitleAttributes {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_release_date(mut self, release_date: i64) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn with_version(mut self, version: impl Into<TitleVersion>) -> Self {
        self.version = version.into();
        self
    }
}

/// A version number kept as its decimal text.
///
/// Databases publish versions both as JSON numbers and as numeric strings;
/// either form decodes to the literal text as published. Anything that is
/// not a JSON number literal, the empty string included, is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TitleVersion(String);

impl TitleVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The version as an integer, if it is one.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for TitleVersion {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}

impl fmt::Display for TitleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TitleVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Keep the literal as written, a round trip through f64 would not
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        let literal = if text.starts_with('"') {
            serde_json::from_str::<String>(text).map_err(de::Error::custom)?
        } else {
            text.to_string()
        };
        if is_json_number(&literal) {
            Ok(TitleVersion(literal))
        } else {
            Err(de::Error::invalid_value(
                de::Unexpected::Str(&literal),
                &"a version number or numeric string",
            ))
        }
    }
}

/// Whether `s` is a complete JSON number literal:
/// `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?`
fn is_json_number(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    let digits = |i: &mut usize| {
        let start = *i;
        while *i < b.len() && b[*i].is_ascii_digit() {
            *i += 1;
        }
        *i > start
    };

    if b.get(i) == Some(&b'-') {
        i += 1;
    }
    match b.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            digits(&mut i);
        }
        _ => return false,
    }
    if b.get(i) == Some(&b'.') {
        i += 1;
        if !digits(&mut i) {
            return false;
        }
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !digits(&mut i) {
            return false;
        }
    }
    i == b.len()
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/attributes_tests.rs"]
mod tests;
