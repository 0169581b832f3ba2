//! Shared newtypes and helpers used across the domain modules.

use crate::error::SdkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ─── Marker ──────────────────────────────────────────────────────────────────

/// Opaque pagination cursor returned by the `…/all` endpoints.
///
/// The API sends it as a number; it is kept as text so callers never have to
/// care. Pass it back unchanged to fetch the next page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(String);

impl Marker {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Query value for the marker. Markers in canonical integer form go back
    /// out as numbers; anything else (e.g. `"007"`) is sent verbatim.
    pub(crate) fn to_value(&self) -> Value {
        match self.0.parse::<u64>() {
            Ok(n) if n.to_string() == self.0 => Value::from(n),
            _ => Value::String(self.0.clone()),
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Marker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Marker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for Marker {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for Marker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Marker(s)),
            Value::Number(n) => Ok(Marker(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "marker must be a string or number, got {}",
                other
            ))),
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Fail with `message` unless `value` holds a non-blank identifier.
pub(crate) fn require(value: &str, message: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::validation(message));
    }
    Ok(())
}

/// Encode a caller-supplied identifier for use as a path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
