//! Error types for the IPDrift client.
//!
//! There are exactly two error types a caller can observe:
//!
//! - [`ConfigError`]: raised synchronously while building an
//!   [`IpDriftConfig`](crate::IpDriftConfig) or an
//!   [`IpDriftClient`](crate::IpDriftClient). No request has been sent yet.
//! - [`IpDriftError`]: every failure after construction, whether it came from
//!   an HTTP error status, a network failure, or a local problem such as an
//!   undecodable response body.
//!
//! # Example
//!
//! ```rust
//! use ipdrift::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! assert_eq!(ConfigError::EmptyApiKey.to_string(), "API key is required");
//! ```

use thiserror::Error;

use crate::clients::RateLimitInfo;

/// Fallback detail used when a failure carries no message of its own.
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error";

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key is required")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http or https URL (e.g., 'https://geo.ipdrift.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Timeout must be greater than zero.
    #[error("Invalid timeout: the request timeout must be greater than zero.")]
    InvalidTimeout,

    /// The underlying HTTP client could not be initialized.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientBuild {
        /// Why the HTTP client could not be built.
        reason: String,
    },
}

/// The single error type returned by every client operation.
///
/// `message` is always present and human readable. `status`, `detail` and
/// `rate_limit` are best effort: callers must treat them as possibly absent.
///
/// # Example
///
/// ```rust
/// use ipdrift::IpDriftError;
///
/// let error = IpDriftError::new("Not Found")
///     .with_status(404)
///     .with_detail("No such endpoint");
///
/// assert_eq!(error.to_string(), "Not Found");
/// assert_eq!(error.status(), Some(404));
/// assert_eq!(error.detail(), Some("No such endpoint"));
/// assert!(error.rate_limit().is_none());
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct IpDriftError {
    message: String,
    status: Option<u16>,
    detail: Option<String>,
    rate_limit: Option<RateLimitInfo>,
}

impl IpDriftError {
    /// Creates an error carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            detail: None,
            rate_limit: None,
        }
    }

    /// Sets the HTTP status code.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the server or failure detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches a rate limit snapshot, if one is available.
    #[must_use]
    pub const fn with_rate_limit(mut self, rate_limit: Option<RateLimitInfo>) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Wraps a failure that never reached the transport (request
    /// construction, body decoding) into an operation-level error with
    /// status 500.
    pub(crate) fn wrap(message: &str, source: &dyn std::error::Error) -> Self {
        let detail = source.to_string();
        let detail = if detail.is_empty() {
            UNKNOWN_ERROR_DETAIL.to_string()
        } else {
            detail
        };
        Self::new(message).with_status(500).with_detail(detail)
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code, if known.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the detail reported by the server or the underlying failure.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the rate limit snapshot from the error response, if present.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimitInfo> {
        self.rate_limit.as_ref()
    }

    /// Returns `true` if the server rejected the request for exceeding the
    /// rate limit.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429)
    }
}
