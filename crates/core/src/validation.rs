//! Presence checks for request fields and identifier validation.
//!
//! A field counts as present when it was supplied and is not the empty
//! string. Every check for one request carries the same message, so the
//! caller sees a single "all of these are required" error no matter which
//! field was missing.

use crate::error::CoreError;
use crate::types::DbId;

/// PostgreSQL truncates identifiers longer than this many bytes.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Require a non-empty text value.
pub fn require_text(value: Option<String>, message: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

/// Require an id supplied as text (multipart and form bodies).
///
/// Surrounding whitespace is ignored. A value that does not parse as an
/// integer is treated the same as a missing one.
pub fn require_id(value: Option<&str>, message: &str) -> Result<DbId, CoreError> {
    value
        .and_then(parse_id)
        .ok_or_else(|| CoreError::Validation(message.to_string()))
}

/// Parse a decimal id, returning `None` for anything that is not an `i32`.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse().ok()
}

/// Validate a database name supplied by the caller.
///
/// Only plain identifiers are accepted: an ASCII letter or underscore
/// followed by ASCII letters, digits or underscores.
pub fn validate_database_name(name: &str) -> Result<(), CoreError> {
    let mut chars = name.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !starts_ok || !rest_ok {
        return Err(CoreError::Validation(format!(
            "Invalid database name '{name}'. Use letters, digits and underscores only"
        )));
    }
    if name.len() > MAX_IDENTIFIER_LEN {
        return Err(CoreError::Validation(format!(
            "Database name must be at most {MAX_IDENTIFIER_LEN} characters"
        )));
    }
    Ok(())
}

/// Quote an identifier for direct interpolation into DDL.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// A database name that passed [`validate_database_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        validate_database_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name quoted for use in DDL.
    pub fn quoted(&self) -> String {
        quote_identifier(&self.0)
    }
}

impl std::fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
