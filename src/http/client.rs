//! Low-level HTTP client — `KlaviyoHttp`.
//!
//! Owns the credential and the `reqwest` connection pool. Endpoint clients
//! hand it a resource path and a [`Payload`]; it builds the v1/v2 request
//! shape, sends it, and classifies the response. No retries: a failed call is
//! returned to the caller as-is.

use crate::error::{HttpError, SdkError};
use crate::http::response::classify;
use crate::request::{build_v1, build_v2, HttpMethod, Payload, PreparedRequest, RequestBody};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Transport settings collected by the client builder.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub default_headers: Vec<(String, String)>,
}

/// Low-level HTTP client for the Klaviyo REST API.
#[derive(Clone)]
pub struct KlaviyoHttp {
    base_url: String,
    client: Client,
    /// Private API key. Read-only after construction and never logged.
    api_key: String,
}

impl KlaviyoHttp {
    pub fn new(api_key: impl Into<String>, config: HttpConfig) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                HttpError::InvalidHeader(format!(
                    "Invalid User-Agent '{}': {}",
                    config.user_agent, e
                ))
            })?,
        );
        for (name, value) in &config.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                HttpError::InvalidHeader(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                HttpError::InvalidHeader(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Send a v1 request (form-encoded parameters).
    pub async fn v1(
        &self,
        method: HttpMethod,
        resource: &str,
        payload: Payload,
    ) -> Result<Value, SdkError> {
        let request = build_v1(method, resource, payload, &self.api_key)?;
        Ok(self.execute(request).await?)
    }

    /// Send a v2 request (query parameters for GET, JSON body otherwise).
    pub async fn v2(
        &self,
        method: HttpMethod,
        resource: &str,
        payload: Payload,
    ) -> Result<Value, SdkError> {
        let request = build_v2(method, resource, payload, &self.api_key)?;
        Ok(self.execute(request).await?)
    }

    /// Execute a prepared request and classify the response.
    pub async fn execute(&self, request: PreparedRequest) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, request.path_and_query);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let path = request.path();
        tracing::debug!(
            method = %request.method,
            version = %request.version,
            path = %path,
            "Sending Klaviyo request"
        );

        let mut req = self.client.request(method, &url);
        match request.body {
            Some(RequestBody::Form(form)) => {
                req = req
                    .header(CONTENT_TYPE, crate::request::FORM_CONTENT_TYPE)
                    .body(form);
            }
            Some(RequestBody::Json(json)) => {
                req = req.json(&json);
            }
            None => {}
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let retry_after = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;

        let result = classify(status, retry_after.as_deref(), &body);
        match &result {
            Ok(_) => tracing::debug!(status, path = %path, "Klaviyo request succeeded"),
            Err(e) => tracing::warn!(status, path = %path, error = %e, "Klaviyo request failed"),
        }
        result
    }
}

impl fmt::Debug for KlaviyoHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KlaviyoHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
