//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — request parameter types
//! - `wire.rs` — serde structs matching API responses (where the shape is fixed)
//! - `client.rs` — sub-client with one method per endpoint

pub mod data_privacy;
pub mod lists;
pub mod metrics;
pub mod profiles;
