//! Data privacy domain — profile deletion requests.

#[cfg(feature = "http")]
pub mod client;

use serde_json::Value;

/// The identifier a deletion request targets. Exactly one is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionTarget {
    Email(String),
    PhoneNumber(String),
    PersonId(String),
}

impl DeletionTarget {
    /// Payload key for this identifier.
    pub fn key(&self) -> &'static str {
        match self {
            DeletionTarget::Email(_) => "email",
            DeletionTarget::PhoneNumber(_) => "phone_number",
            DeletionTarget::PersonId(_) => "person_id",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            DeletionTarget::Email(v)
            | DeletionTarget::PhoneNumber(v)
            | DeletionTarget::PersonId(v) => v,
        }
    }

    pub(crate) fn to_entry(&self) -> (&'static str, Value) {
        (self.key(), Value::from(self.value()))
    }
}
