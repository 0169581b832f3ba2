//! Request shapes for the v1 and v2 APIs.
//!
//! Everything here is plain data: a [`Payload`] goes in, a [`PreparedRequest`]
//! comes out. No I/O happens in this module, so the transport layer stays a
//! thin executor and the encoding rules can be tested directly.
//!
//! # Encoding rules
//!
//! - Both versions add the private key to the payload as `api_key` and drop
//!   every `null` field before encoding.
//! - **v1** form-encodes all parameters. `GET` puts the form in the query
//!   string; other methods send it as an `application/x-www-form-urlencoded`
//!   body.
//! - **v2** `GET` encodes the payload as query parameters, expanding the
//!   [`MULTI_VALUE_QUERY_PARAMETERS`] arrays into repeated keys. Other methods
//!   send the whole payload as a JSON body.

use crate::error::SdkError;
use crate::network::API_ROOT;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// v2 query keys whose array values are sent as repeated `key=value` pairs.
pub const MULTI_VALUE_QUERY_PARAMETERS: [&str; 3] = ["emails", "phone_numbers", "push_tokens"];

/// Key the private API key is sent under.
pub const API_KEY_PARAM: &str = "api_key";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which API generation a resource lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Payload ─────────────────────────────────────────────────────────────────

/// Key/value parameters of a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a payload from any value that serializes to a JSON object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, SdkError> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(SdkError::Serde(<serde_json::Error as serde::ser::Error>::custom(
                format!("payload must be a JSON object, got {}", other),
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert `value` if present; `None` is stored as `null` and removed by
    /// [`Payload::clean`].
    pub fn insert_opt<V: Into<Value>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        self.0.insert(key.into(), value.map(Into::into).unwrap_or(Value::Null));
        self
    }

    /// Builder-style [`Payload::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merge all entries of `other`, overwriting existing keys.
    pub fn extend(&mut self, other: Payload) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    /// Remove every `null`-valued key.
    pub fn clean(&mut self) {
        self.0.retain(|_, v| !v.is_null());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    fn with_credential(mut self, api_key: &str) -> Self {
        self.insert(API_KEY_PARAM, api_key);
        self.clean();
        self
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ─── Prepared request ────────────────────────────────────────────────────────

/// Encoded request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` text.
    Form(String),
    /// `application/json` document.
    Json(Value),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Form(_) => FORM_CONTENT_TYPE,
            RequestBody::Json(_) => JSON_CONTENT_TYPE,
        }
    }
}

/// A fully encoded request, relative to the API host.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub version: ApiVersion,
    /// Resource path below the version prefix, e.g. `list/abc/members`.
    pub resource: String,
    /// Absolute path including the query string, e.g. `/api/v2/lists?api_key=…`.
    pub path_and_query: String,
    pub body: Option<RequestBody>,
}

impl PreparedRequest {
    /// Path without the query string. Safe to log: the credential only ever
    /// travels in the query or the body.
    pub fn path(&self) -> String {
        format!("/{}/{}/{}", API_ROOT, self.version, self.resource)
    }
}

/// Build a v1 request: every parameter form-encoded.
pub fn build_v1(
    method: HttpMethod,
    resource: &str,
    payload: Payload,
    api_key: &str,
) -> Result<PreparedRequest, SdkError> {
    let payload = payload.with_credential(api_key);

    let mut pairs = Vec::with_capacity(payload.len());
    for (key, value) in payload.0.iter() {
        match value {
            Value::Array(items) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((key.clone(), stringify(item)));
                }
            }
            other => pairs.push((key.clone(), stringify(other))),
        }
    }
    let form = encode_pairs(pairs)?;

    let mut request = PreparedRequest {
        method,
        version: ApiVersion::V1,
        resource: resource.to_string(),
        path_and_query: String::new(),
        body: None,
    };
    let path = request.path();
    if method == HttpMethod::Get {
        request.path_and_query = format!("{}?{}", path, form);
    } else {
        request.path_and_query = path;
        request.body = Some(RequestBody::Form(form));
    }
    Ok(request)
}

/// Build a v2 request: query parameters for `GET`, JSON body otherwise.
pub fn build_v2(
    method: HttpMethod,
    resource: &str,
    payload: Payload,
    api_key: &str,
) -> Result<PreparedRequest, SdkError> {
    let payload = payload.with_credential(api_key);

    let mut request = PreparedRequest {
        method,
        version: ApiVersion::V2,
        resource: resource.to_string(),
        path_and_query: String::new(),
        body: None,
    };
    let path = request.path();

    if method == HttpMethod::Get {
        let pairs = v2_query_pairs(&payload);
        request.path_and_query = format!("{}?{}", path, encode_pairs(pairs)?);
    } else {
        request.path_and_query = path;
        request.body = Some(RequestBody::Json(payload.into_value()));
    }
    Ok(request)
}

fn v2_query_pairs(payload: &Payload) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(payload.len());
    for (key, value) in payload.0.iter() {
        match value {
            Value::Array(items) if MULTI_VALUE_QUERY_PARAMETERS.contains(&key.as_str()) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((key.clone(), stringify(item)));
                }
            }
            other => pairs.push((key.clone(), stringify(other))),
        }
    }
    pairs
}

/// Keys are emitted in sorted order; repeated keys keep their relative order.
fn encode_pairs(mut pairs: Vec<(String, String)>) -> Result<String, SdkError> {
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    serde_urlencoded::to_string(&pairs).map_err(|e| {
        SdkError::Serde(<serde_json::Error as serde::ser::Error>::custom(e.to_string()))
    })
}

/// Text form of a single parameter value.
///
/// Arrays outside the multi-valued set are joined with `,`; nested objects are
/// sent as compact JSON. `null` array elements are dropped.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter(|v| !v.is_null())
            .map(stringify)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEY: &str = "pk_test";

    #[test]
    fn test_clean_strips_nulls_only() {
        let mut payload = Payload::new();
        payload
            .insert("a", Value::Null)
            .insert("b", "")
            .insert("c", json!([]))
            .insert_opt::<String>("d", None);
        payload.clean();

        assert!(!payload.contains_key("a"));
        assert!(!payload.contains_key("d"));
        assert_eq!(payload.get("b"), Some(&json!("")));
        assert_eq!(payload.get("c"), Some(&json!([])));
    }

    #[test]
    fn test_v1_get_puts_form_in_query() {
        let payload = Payload::new().with("count", 50).with("sort", "desc");
        let req = build_v1(HttpMethod::Get, "metrics/timeline", payload, KEY).unwrap();

        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path_and_query,
            "/api/v1/metrics/timeline?api_key=pk_test&count=50&sort=desc"
        );
        assert!(req.body.is_none());
        assert_eq!(req.path(), "/api/v1/metrics/timeline");
    }

    #[test]
    fn test_v1_put_sends_form_body() {
        let payload = Payload::new().with("$first_name", "Ada Lovelace");
        let req = build_v1(HttpMethod::Put, "person/abc", payload, KEY).unwrap();

        assert_eq!(req.path_and_query, "/api/v1/person/abc");
        let body = req.body.unwrap();
        assert_eq!(body.content_type(), FORM_CONTENT_TYPE);
        assert_eq!(
            body,
            RequestBody::Form("%24first_name=Ada+Lovelace&api_key=pk_test".to_string())
        );
    }

    #[test]
    fn test_v1_arrays_repeat_keys() {
        let payload = Payload::new().with("email", json!(["a@x.com", "b@x.com"]));
        let req = build_v1(HttpMethod::Get, "segment/s1/members", payload, KEY).unwrap();
        assert_eq!(
            req.path_and_query,
            "/api/v1/segment/s1/members?api_key=pk_test&email=a%40x.com&email=b%40x.com"
        );
    }

    #[test]
    fn test_credential_overrides_caller_value() {
        let payload = Payload::new().with(API_KEY_PARAM, "spoofed");
        let req = build_v2(HttpMethod::Post, "lists", payload, KEY).unwrap();
        assert_eq!(req.body, Some(RequestBody::Json(json!({"api_key": "pk_test"}))));
    }

    #[test]
    fn test_v2_get_omits_null_fields() {
        let mut payload = Payload::new();
        payload.insert_opt("marker", None::<u64>).insert("emails", Value::Null);
        let req = build_v2(HttpMethod::Get, "list/L1/exclusions/all", payload, KEY).unwrap();

        assert_eq!(req.path_and_query, "/api/v2/list/L1/exclusions/all?api_key=pk_test");
        assert!(!req.path_and_query.contains("marker"));
        assert!(!req.path_and_query.contains("null"));
    }

    #[test]
    fn test_v2_get_repeats_multi_value_keys() {
        let payload = Payload::new()
            .with("emails", json!(["a@x.com", "b@x.com"]))
            .with("phone_numbers", json!(["+15555550100"]));
        let req = build_v2(HttpMethod::Get, "list/L1/members", payload, KEY).unwrap();

        assert_eq!(
            req.path_and_query,
            "/api/v2/list/L1/members?api_key=pk_test&emails=a%40x.com&emails=b%40x.com&phone_numbers=%2B15555550100"
        );
        assert!(!req.path_and_query.contains("%2C"));
    }

    #[test]
    fn test_v2_get_empty_multi_value_array_adds_nothing() {
        let payload = Payload::new().with("push_tokens", json!([]));
        let req = build_v2(HttpMethod::Get, "list/L1/members", payload, KEY).unwrap();
        assert_eq!(req.path_and_query, "/api/v2/list/L1/members?api_key=pk_test");
    }

    #[test]
    fn test_null_array_elements_are_not_encoded() {
        let payload = Payload::new()
            .with("emails", json!([null, "a@x.com"]))
            .with("push_tokens", json!([null]))
            .with("tags", json!(["a", null, "b"]));
        let req = build_v2(HttpMethod::Get, "list/L1/members", payload, KEY).unwrap();
        assert_eq!(
            req.path_and_query,
            "/api/v2/list/L1/members?api_key=pk_test&emails=a%40x.com&tags=a%2Cb"
        );

        let payload = Payload::new().with("email", json!([null]));
        let req = build_v1(HttpMethod::Get, "segment/s1/members", payload, KEY).unwrap();
        assert_eq!(req.path_and_query, "/api/v1/segment/s1/members?api_key=pk_test");
    }

    #[test]
    fn test_v2_get_joins_other_arrays() {
        let payload = Payload::new().with("tags", json!(["a", "b"]));
        let req = build_v2(HttpMethod::Get, "lists", payload, KEY).unwrap();
        assert_eq!(req.path_and_query, "/api/v2/lists?api_key=pk_test&tags=a%2Cb");
    }

    #[test]
    fn test_v2_non_get_sends_json_body() {
        let payload = Payload::new().with("list_name", "Newsletter");
        let req = build_v2(HttpMethod::Put, "list/L1", payload, KEY).unwrap();

        assert_eq!(req.path_and_query, "/api/v2/list/L1");
        let body = req.body.unwrap();
        assert_eq!(body.content_type(), JSON_CONTENT_TYPE);
        assert_eq!(
            body,
            RequestBody::Json(json!({"api_key": "pk_test", "list_name": "Newsletter"}))
        );
    }

    #[test]
    fn test_v2_delete_keeps_empty_arrays_in_body() {
        let payload = Payload::new()
            .with("emails", json!(["a@x.com"]))
            .with("phone_numbers", json!([]));
        let req = build_v2(HttpMethod::Delete, "list/L1/subscribe", payload, KEY).unwrap();
        assert_eq!(
            req.body,
            Some(RequestBody::Json(json!({
                "api_key": "pk_test",
                "emails": ["a@x.com"],
                "phone_numbers": []
            })))
        );
    }

    #[test]
    fn test_from_serialize_rejects_non_objects() {
        assert!(Payload::from_serialize(&json!(["a"])).is_err());
        assert!(Payload::from_serialize(&()).unwrap().is_empty());

        #[derive(Serialize)]
        struct Params {
            count: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort: Option<String>,
        }
        let payload = Payload::from_serialize(&Params { count: 5, sort: None }).unwrap();
        assert_eq!(payload.get("count"), Some(&json!(5)));
        assert!(!payload.contains_key("sort"));
    }
}
