//! Network constants for the Klaviyo API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://a.klaviyo.com";

/// Root segment shared by every API path.
pub const API_ROOT: &str = "api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the private API key.
pub const API_KEY_ENV: &str = "KLAVIYO_PRIVATE_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "KLAVIYO_API_URL";

/// `User-Agent` sent with every request.
pub fn default_user_agent() -> String {
    format!("klaviyo-rust/{}", env!("CARGO_PKG_VERSION"))
}
