//! HTTP transport — `KlaviyoHttp` and response classification.

pub mod client;
pub mod response;

pub use client::{HttpConfig, KlaviyoHttp};
pub use response::{classify, parse_retry_after};
