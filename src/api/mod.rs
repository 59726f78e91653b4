//! HTTP client for the FixitNow REST API.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
