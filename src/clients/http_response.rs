//! HTTP response types for the IPDrift client.
//!
//! This module provides the [`HttpResponse`] type and the
//! [`RateLimitInfo`] snapshot parsed from response headers.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// The snapshot only exists as a unit: if any of `x-ratelimit-limit`,
/// `x-ratelimit-remaining` or `x-ratelimit-reset` is missing or is not a
/// base-10 integer, no snapshot is produced.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use ipdrift::RateLimitInfo;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["120".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["0".to_string()]);
/// headers.insert("x-ratelimit-reset".to_string(), vec!["1634567890".to_string()]);
///
/// let info = RateLimitInfo::from_headers(&headers).unwrap();
/// assert_eq!(info.limit, 120);
/// assert_eq!(info.remaining, 0);
/// assert_eq!(info.reset, 1_634_567_890);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// The number of requests allowed in the current window.
    pub limit: u64,
    /// The number of requests left in the current window.
    pub remaining: u64,
    /// When the window resets, as a Unix timestamp in seconds.
    pub reset: u64,
}

impl RateLimitInfo {
    /// Header carrying the window size.
    pub const LIMIT_HEADER: &'static str = "x-ratelimit-limit";
    /// Header carrying the remaining request count.
    pub const REMAINING_HEADER: &'static str = "x-ratelimit-remaining";
    /// Header carrying the reset timestamp.
    pub const RESET_HEADER: &'static str = "x-ratelimit-reset";

    /// Parses a snapshot from lowercased response headers.
    ///
    /// Returns `None` unless all three headers are present and parse as
    /// non-negative base-10 integers.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let value = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse::<u64>().ok())
        };

        Some(Self {
            limit: value(Self::LIMIT_HEADER)?,
            remaining: value(Self::REMAINING_HEADER)?,
            reset: value(Self::RESET_HEADER)?,
        })
    }

    /// Returns the reset time as a UTC timestamp.
    ///
    /// Returns `None` if `reset` is outside the range chrono can represent.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.reset).ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }
}

/// An HTTP response from the IPDrift API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (lowercased, headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Parses a response body.
    ///
    /// An empty body becomes `{}`; a body that is not valid JSON is kept as a
    /// JSON string holding the raw text.
    #[must_use]
    pub fn parse_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

}
