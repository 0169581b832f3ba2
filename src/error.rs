//! Unified SDK error types.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// A required identifier or the API key was missing. Raised before any
    /// request is sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        SdkError::Http(HttpError::Reqwest(err))
    }
}

impl SdkError {
    /// Shorthand for a validation failure.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        SdkError::Validation(message.into())
    }

    /// The HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
///
/// Status variants carry the response body parsed as JSON. Bodies that are not
/// JSON are kept as a JSON string; empty bodies become `null`.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// 403 — the private API key was rejected.
    #[error("Authentication failed ({status}): {body}")]
    Authentication { status: u16, body: Value },

    /// 429 — the account hit its rate limit.
    #[error("Rate limited ({status}, retry after {retry_after:?}): {body}")]
    RateLimited {
        status: u16,
        body: Value,
        retry_after: Option<Duration>,
    },

    /// 500 or 503.
    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: Value },

    /// Any other non-2xx status.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: Value },

    /// A 2xx response whose body is not valid JSON.
    #[error("Invalid JSON in {status} response: {message}")]
    Decode { status: u16, message: String },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl HttpError {
    /// HTTP status code of the response that produced this error.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Authentication { status, .. }
            | HttpError::RateLimited { status, .. }
            | HttpError::ServerError { status, .. }
            | HttpError::Api { status, .. }
            | HttpError::Decode { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::InvalidHeader(_) => None,
        }
    }

    /// Parsed response body for status errors.
    pub fn body(&self) -> Option<&Value> {
        match self {
            HttpError::Authentication { body, .. }
            | HttpError::RateLimited { body, .. }
            | HttpError::ServerError { body, .. }
            | HttpError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// `Retry-After` reported by a 429 response.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            HttpError::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
