//! # Klaviyo SDK
//!
//! Async Rust client for the Klaviyo v1/v2 REST API: lists, subscriptions,
//! memberships, exclusions, segment lookups, plus profile, metric and
//! data-privacy endpoints.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Request shape** — `Payload` cleaning and v1 (form) / v2 (query or JSON)
//!    encoding. Pure, always available.
//! 2. **HTTP** — `KlaviyoHttp` sends prepared requests and maps status codes to
//!    typed errors. No retries.
//! 3. **High-level client** — `KlaviyoClient` with nested sub-clients, one
//!    method per endpoint.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use klaviyo_sdk::prelude::*;
//!
//! let client = KlaviyoClient::new("pk_...")?;
//!
//! let lists = client.lists().get_lists().await?;
//! let members = client
//!     .lists()
//!     .get_members_from_list("AbC123", &ProfileLookup::new().with_email("ada@example.com"))
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! Missing identifiers fail with [`error::SdkError::Validation`] before any
//! request is sent. API failures surface as [`error::HttpError`]:
//! `Authentication` (403), `RateLimited` (429, with `Retry-After`),
//! `ServerError` (500/503) and `Api` (anything else).

// ── Layer 1: Request shape ───────────────────────────────────────────────────

/// Shared newtypes and validation helpers.
pub mod shared;

/// Domain modules: parameter types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

/// Payloads and v1/v2 request encoding.
pub mod request;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport and response classification.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `KlaviyoClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::Marker;

    // Domain types
    pub use crate::domain::data_privacy::DeletionTarget;
    pub use crate::domain::lists::{
        CreatedList, ExclusionRecord, ListDetails, ListSummary, Member, Page, ProfileInput,
        ProfileLookup,
    };
    pub use crate::domain::metrics::{ExportParams, ExportUnit, SortOrder, TimelineParams};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Requests
    pub use crate::request::{HttpMethod, Payload};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        DataPrivacyClient, KlaviyoClient, KlaviyoClientBuilder, ListsClient, MetricsClient,
        ProfilesClient,
    };
}
