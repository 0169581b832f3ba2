//! Lists domain — lists, subscriptions, memberships, exclusions, segments.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use wire::{CreatedList, ExclusionRecord, ListDetails, ListSummary, Member, Page};

/// Maximum number of emails the segment lookup accepts; extra entries are
/// dropped before the request is sent.
pub const SEGMENT_LOOKUP_LIMIT: usize = 100;

/// A profile to subscribe to, or add to, a list.
///
/// At least one of `email`, `phone_number` or `push_token` identifies the
/// profile; any other properties ride along in `properties`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_token: Option<String>,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl ProfileInput {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..Default::default()
        }
    }

    pub fn push_token(push_token: impl Into<String>) -> Self {
        Self {
            push_token: Some(push_token.into()),
            ..Default::default()
        }
    }

    /// Attach a custom profile property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Identifiers to look up (or remove) on a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileLookup {
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub push_tokens: Vec<String>,
}

impl ProfileLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(email.into());
        self
    }

    pub fn with_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emails.extend(emails.into_iter().map(Into::into));
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_numbers.push(phone_number.into());
        self
    }

    pub fn with_push_token(mut self, push_token: impl Into<String>) -> Self {
        self.push_tokens.push(push_token.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phone_numbers.is_empty() && self.push_tokens.is_empty()
    }
}
