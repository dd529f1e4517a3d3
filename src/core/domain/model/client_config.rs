//! Client-side configuration for the HTTP executor.

use std::time::Duration;

/// Rate limiting applied before each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained request rate.
    pub requests_per_second: u32,
    /// Requests allowed in a burst above the sustained rate.
    pub burst_size: u32,
}

/// Configuration for [`crate::HttpExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Accept self-signed certificates (common on LAN-only servers).
    pub accept_invalid_certs: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Optional client-side rate limit; `None` disables limiting.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: false,
            timeout: Duration::from_secs(30),
            rate_limit: None,
        }
    }
}
