//! Outbound HTTP client construction
//!
//! Both the array and the inventory API get their own client so certificate verification
//! can be toggled per endpoint. Every client carries connect and request timeouts; neither
//! call is allowed to block the run indefinitely.

use crate::config::HttpConfig;
use crate::error::{CollectorError, Result};
use std::time::Duration;

/// Longest response body excerpt carried in an error message
const MAX_ERROR_BODY: usize = 512;

pub fn build_client(http: &HttpConfig, verify_ssl: bool) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(http.connect_timeout_seconds))
        .timeout(Duration::from_secs(http.request_timeout_seconds))
        .user_agent(concat!("xio-collector/", env!("CARGO_PKG_VERSION")));

    if !verify_ssl {
        // Custom TLS settings for self-signed certs
        builder = builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    builder
        .build()
        .map_err(|e| CollectorError::Config(format!("failed to build HTTP client: {e}")))
}

/// Read a response body for an error message, truncated to a readable length
pub async fn error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(text) => truncate(text.trim(), MAX_ERROR_BODY),
        Err(e) => format!("<unreadable body: {e}>"),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
