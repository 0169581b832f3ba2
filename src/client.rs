//! High-level client — `KlaviyoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the credential, and the accessor methods.

use crate::domain::data_privacy::client::DataPrivacy;
use crate::domain::lists::client::Lists;
use crate::domain::metrics::client::Metrics;
use crate::domain::profiles::client::Profiles;
use crate::error::SdkError;
use crate::http::{HttpConfig, KlaviyoHttp};
use crate::network::{self, API_KEY_ENV, API_URL_ENV, DEFAULT_TIMEOUT_SECS};
use crate::request::{HttpMethod, Payload};

use serde_json::Value;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::data_privacy::client::DataPrivacy as DataPrivacyClient;
pub use crate::domain::lists::client::Lists as ListsClient;
pub use crate::domain::metrics::client::Metrics as MetricsClient;
pub use crate::domain::profiles::client::Profiles as ProfilesClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.lists()`, `client.profiles()`, etc. Cloning is cheap and shares
/// the connection pool.
#[derive(Debug, Clone)]
pub struct KlaviyoClient {
    pub(crate) http: KlaviyoHttp,
}

impl KlaviyoClient {
    /// Client for the default API host with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SdkError> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> KlaviyoClientBuilder {
        KlaviyoClientBuilder::default()
    }

    /// Build a client from `KLAVIYO_PRIVATE_API_KEY` and the optional
    /// `KLAVIYO_API_URL`.
    pub fn from_env() -> Result<Self, SdkError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            SdkError::validation(format!("{} is not set.", API_KEY_ENV))
        })?;
        let mut builder = Self::builder().api_key(api_key);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(&url);
        }
        builder.build()
    }

    /// The private API key sent with every request. Read-only.
    pub fn api_key(&self) -> &str {
        self.http.api_key()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn lists(&self) -> Lists<'_> {
        Lists { client: self }
    }

    pub fn profiles(&self) -> Profiles<'_> {
        Profiles { client: self }
    }

    pub fn metrics(&self) -> Metrics<'_> {
        Metrics { client: self }
    }

    pub fn data_privacy(&self) -> DataPrivacy<'_> {
        DataPrivacy { client: self }
    }

    // ── Raw access ───────────────────────────────────────────────────────

    /// Call a v1 endpoint that has no dedicated method. `resource` is the
    /// path below `/api/v1/`.
    pub async fn v1_request(
        &self,
        method: HttpMethod,
        resource: &str,
        payload: Payload,
    ) -> Result<Value, SdkError> {
        self.http.v1(method, resource.trim_start_matches('/'), payload).await
    }

    /// Call a v2 endpoint that has no dedicated method. `resource` is the
    /// path below `/api/v2/`.
    pub async fn v2_request(
        &self,
        method: HttpMethod,
        resource: &str,
        payload: Payload,
    ) -> Result<Value, SdkError> {
        self.http.v2(method, resource.trim_start_matches('/'), payload).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct KlaviyoClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    default_headers: Vec<(String, String)>,
}

impl Default for KlaviyoClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: network::default_user_agent(),
            default_headers: Vec::new(),
        }
    }
}

impl KlaviyoClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<KlaviyoClient, SdkError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SdkError::validation("API key was not provided."))?;

        let http = KlaviyoHttp::new(
            api_key,
            HttpConfig {
                base_url: self.base_url,
                timeout: self.timeout,
                user_agent: self.user_agent,
                default_headers: self.default_headers,
            },
        )?;

        tracing::debug!(base_url = %http.base_url(), "Klaviyo client ready");
        Ok(KlaviyoClient { http })
    }
}
