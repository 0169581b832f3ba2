//! Wire types for list, membership, and exclusion responses.

use crate::shared::Marker;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry of `GET /api/v2/lists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListSummary {
    pub list_id: String,
    #[serde(default)]
    pub list_name: String,
}

/// Response of `POST /api/v2/lists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedList {
    pub list_id: String,
}

/// Response of `GET /api/v2/list/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListDetails {
    #[serde(default)]
    pub list_name: String,
    /// Any other attributes the API reports (folder, creation time, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A profile as reported by the subscribe / members / segment endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Record of `GET /api/v2/list/{id}/exclusions/all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExclusionRecord {
    pub email: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One page of a marker-paginated endpoint.
///
/// `marker` is `None` on the last page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub marker: Option<Marker>,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.marker.as_ref().is_some_and(|m| !m.is_empty())
    }
}

/// Envelope of the v1 segment membership lookup.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SegmentMembersResponse {
    #[serde(default)]
    pub data: Vec<Member>,
}
