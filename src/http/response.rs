//! Response classification — maps a status code and body to a JSON value or
//! a typed [`HttpError`].

use crate::error::HttpError;
use serde_json::Value;
use std::time::Duration;

/// Turn a raw response into the parsed JSON body or the matching error.
///
/// | status      | result                        |
/// |-------------|-------------------------------|
/// | 2xx         | body parsed as JSON           |
/// | 403         | [`HttpError::Authentication`] |
/// | 429         | [`HttpError::RateLimited`]    |
/// | 500, 503    | [`HttpError::ServerError`]    |
/// | other       | [`HttpError::Api`]            |
pub fn classify(status: u16, retry_after: Option<&str>, body: &str) -> Result<Value, HttpError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(body).map_err(|e| HttpError::Decode {
            status,
            message: e.to_string(),
        });
    }

    let body = error_body(body);
    match status {
        403 => Err(HttpError::Authentication { status, body }),
        429 => Err(HttpError::RateLimited {
            status,
            body,
            retry_after: parse_retry_after(retry_after),
        }),
        500 | 503 => Err(HttpError::ServerError { status, body }),
        _ => Err(HttpError::Api { status, body }),
    }
}

/// Non-JSON error bodies are kept as a JSON string; empty ones become `null`.
fn error_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Parse a `Retry-After` header given in (possibly fractional) seconds.
/// HTTP-date values, negative and out-of-range delays yield `None`.
pub fn parse_retry_after(value: Option<&str>) -> Option<Duration> {
    let value = value?.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    match value.parse::<f64>() {
        Ok(secs) => Duration::try_from_secs_f64(secs).ok(),
        Err(_) => None,
    }
}
