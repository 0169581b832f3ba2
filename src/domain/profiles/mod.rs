//! Profiles domain — person lookup and updates.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// Response of `GET /api/v2/people/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileId {
    pub id: String,
}
