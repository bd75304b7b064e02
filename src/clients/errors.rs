//! Transport-level error types.
//!
//! These errors describe what went wrong on the wire. They never cross the
//! [`IpDriftClient`](crate::IpDriftClient) boundary: every [`TransportError`]
//! is turned into an [`IpDriftError`](crate::IpDriftError) by
//! [`normalize`](crate::clients::normalize).
//!
//! - [`HttpResponseError`]: a non-2xx response, with status, headers and body
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`TransportError`]: unified error type for a single transport call

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The display text mirrors what the transport would report on its own; the
/// normalizer prefers the `detail` field of `body` when there is one.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use ipdrift::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     status: 404,
///     headers: HashMap::new(),
///     body: json!({"detail": "Not Found"}),
/// };
///
/// assert_eq!(error.to_string(), "Request failed with status code 404");
/// ```
#[derive(Debug, Error)]
#[error("Request failed with status code {status}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Response headers, lowercased, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,
}

/// Unified error type for a single transport call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A non-2xx response was received.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// No response arrived within the configured timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The request was rejected before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error. Built through [`TransportError::network`]
    /// so the request URL, which carries the API key, is not retained.
    #[error("Network error: {0}")]
    Network(reqwest::Error),
}

impl TransportError {
    /// Creates a timeout error for the given timeout.
    #[must_use]
    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Creates a network error, dropping the request URL from `error`.
    #[must_use]
    pub fn network(error: reqwest::Error) -> Self {
        Self::Network(error.without_url())
    }

    /// Returns the failed response, if the server answered at all.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Response(response) => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_message_includes_status() {
        let error = HttpResponseError {
            status: 503,
            headers: HashMap::new(),
            body: json!({}),
        };
        assert_eq!(error.to_string(), "Request failed with status code 503");
    }

    #[tokio::test]
    async fn test_network_error_drops_request_url() {
        let error = reqwest::get("http://127.0.0.1:1/v1/lookup?api_key=sk_secret_123")
            .await
            .unwrap_err();
        assert!(error.url().is_some());

        let error = TransportError::network(error);
        let message = error.to_string();
        assert!(message.starts_with("Network error: "), "{message}");
        assert!(!message.contains("sk_secret_123"), "{message}");
        assert!(!format!("{error:?}").contains("sk_secret_123"));
    }

    #[test]
    fn test_timeout_error_message() {
        let error = TransportError::timeout(Duration::from_millis(10_000));
        assert_eq!(error.to_string(), "timeout of 10000ms exceeded");
        assert!(error.response().is_none());
    }

    #[test]
    fn test_response_accessor_returns_http_error() {
        let error = TransportError::from(HttpResponseError {
            status: 401,
            headers: HashMap::new(),
            body: json!({"detail": "Invalid or inactive API key"}),
        });

        assert_eq!(error.response().map(|r| r.status), Some(401));
        assert_eq!(error.to_string(), "Request failed with status code 401");
    }

    #[test]
    fn test_invalid_request_error_message() {
        let error = TransportError::from(InvalidHttpRequestError::EmptyPath);
        assert_eq!(error.to_string(), "Cannot send a request without a path.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _: &dyn std::error::Error = &TransportError::timeout(Duration::from_secs(1));
    }
}
