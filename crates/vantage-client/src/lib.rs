//! Typed HTTP client for the Vantage REST backend.
//!
//! Each operation issues exactly one request with a bounded timeout and maps
//! the raw server record into the domain shape at this boundary. Empty or
//! malformed response bodies decode as absence-of-value, never as an error.

pub mod client;
pub mod config;
pub mod error;
mod wire;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
