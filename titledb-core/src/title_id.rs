//! Title identifier decoding.
//!
//! Every record in a title database is keyed by a hexadecimal title ID. The
//! ID itself encodes what kind of record it is and which base title it
//! belongs to:
//!
//! ```text
//! 0100a2c3d4e5 0 000   base title       (suffix "000")
//! 0100a2c3d4e5 0 800   update           (suffix "800")
//! 0100a2c3d4e5 1 001   DLC #1           (relationship digit + 1, running counter)
//! ^^^^^^^^^^^^ ^ ^^^
//! family       | suffix
//!              relationship digit
//! ```
//!
//! All three resolve to the same base key, `0100a2c3d4e50`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix carried by base title IDs.
pub const BASE_SUFFIX: &str = "000";

/// Suffix carried by update IDs.
pub const UPDATE_SUFFIX: &str = "800";

/// Shortest ID that still has a relationship digit in front of the suffix.
pub const MIN_ID_LEN: usize = 4;

/// What kind of record a title ID refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleRole {
    /// The purchasable application itself.
    Base,
    /// A patch for a base title.
    Update,
    /// Downloadable content for a base title.
    Dlc,
}

impl TitleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Update => "update",
            Self::Dlc => "dlc",
        }
    }
}

impl fmt::Display for TitleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A title ID that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("title id '{id}' is too short ({len} chars, need at least 4)")]
    TooShort { id: String, len: usize },

    #[error("title id '{0}' contains non-ASCII characters")]
    NonAscii(String),

    #[error("title id '{id}' has non-hex relationship digit '{digit}'")]
    InvalidDigit { id: String, digit: char },

    #[error("title id '{0}' has DLC relationship digit 0, no base title can precede it")]
    DigitUnderflow(String),
}

/// A decoded title ID: its normalized form, its role, and the key of the
/// base title it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleId {
    id: String,
    role: TitleRole,
    base_key: String,
}

impl TitleId {
    /// Decode a raw title ID. Case is folded to lowercase first.
    pub fn parse(raw: &str) -> Result<Self, IdError> {
        let id = raw.to_ascii_lowercase();
        let (role, base_key) = classify(&id)?;
        Ok(Self { id, role, base_key })
    }

    /// The lowercase ID as it appears in the database.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> TitleRole {
        self.role
    }

    /// Grouping key shared by a base title, its updates and its DLC.
    pub fn base_key(&self) -> &str {
        &self.base_key
    }

    /// The ID of the owning base title (`base_key` + `"000"`).
    pub fn base_id(&self) -> String {
        base_id_for_key(&self.base_key)
    }

    pub fn into_string(self) -> String {
        self.id
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl std::str::FromStr for TitleId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Rebuild a base title ID from its base key.
pub fn base_id_for_key(base_key: &str) -> String {
    format!("{base_key}{BASE_SUFFIX}")
}

/// Determine the role of an already-lowercased title ID and the base key
/// it groups under.
///
/// Rules are checked in order: `"000"` suffix is a base title, `"800"` is an
/// update, and anything else is DLC whose relationship digit sits one above
/// the base title's.
pub fn classify(id: &str) -> Result<(TitleRole, String), IdError> {
    if !id.is_ascii() {
        return Err(IdError::NonAscii(id.to_string()));
    }
    if id.len() < MIN_ID_LEN {
        return Err(IdError::TooShort {
            id: id.to_string(),
            len: id.len(),
        });
    }

    let prefix = &id[..id.len() - BASE_SUFFIX.len()];
    if id.ends_with(BASE_SUFFIX) {
        return Ok((TitleRole::Base, prefix.to_string()));
    }
    if id.ends_with(UPDATE_SUFFIX) {
        return Ok((TitleRole::Update, prefix.to_string()));
    }

    let digit_pos = id.len() - MIN_ID_LEN;
    let digit = char::from(id.as_bytes()[digit_pos]);
    let value = digit.to_digit(16).ok_or_else(|| IdError::InvalidDigit {
        id: id.to_string(),
        digit,
    })?;
    let base_value = value
        .checked_sub(1)
        .ok_or_else(|| IdError::DigitUnderflow(id.to_string()))?;
    // from_digit yields lowercase, matching the folded input
    let base_digit = char::from_digit(base_value, 16)
        .ok_or_else(|| IdError::DigitUnderflow(id.to_string()))?;

    let mut base_key = String::with_capacity(digit_pos + 1);
    base_key.push_str(&id[..digit_pos]);
    base_key.push(base_digit);
    Ok((TitleRole::Dlc, base_key))
}

#[cfg(test)]
#[path = "tests/title_id_tests.rs"]
mod tests;
