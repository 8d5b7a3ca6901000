//! HTTP transport layer
//!
//! This module provides the shared request pipeline all feature code funnels
//! through:
//! - Static transport configuration with environment sourcing
//! - Per-request timing metadata, merged non-destructively on completion
//! - Failure classification into the API / network / configuration taxonomy
//! - Session-expiry broadcast on 401 responses

pub mod client;
pub mod config;
pub mod metrics;


pub use client::{ApiClient, ApiResponse, RequestOptions};
pub use config::TransportConfig;
pub use metrics::RequestMetrics;

// Re-export commonly used types
pub use reqwest::Method;
