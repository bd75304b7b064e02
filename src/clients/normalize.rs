//! Conversion of transport failures into [`IpDriftError`].
//!
//! Every [`TransportError`] passes through [`normalize`] exactly once. The
//! resulting error replaces the transport error; nothing is retried here,
//! whatever the status.

use std::borrow::Cow;

use serde_json::Value;

use crate::clients::errors::TransportError;
use crate::clients::http_response::RateLimitInfo;
use crate::error::IpDriftError;

/// Status reported when the failure carries no response (network errors,
/// DNS failures, timeouts).
pub const NO_RESPONSE_STATUS: u16 = 500;

/// Returns the fixed human-readable message for an HTTP status.
///
/// ```rust
/// use ipdrift::clients::status_message;
///
/// assert_eq!(status_message(401), "Unauthorized - Invalid API key");
/// assert_eq!(status_message(418), "HTTP Error 418");
/// ```
#[must_use]
pub fn status_message(status: u16) -> Cow<'static, str> {
    let message = match status {
        400 => "Bad Request",
        401 => "Unauthorized - Invalid API key",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Rate Limit Exceeded",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        other => return Cow::Owned(format!("HTTP Error {other}")),
    };
    Cow::Borrowed(message)
}

/// Converts a transport failure into the client's error type.
///
/// - `status` is taken from the response, or [`NO_RESPONSE_STATUS`]
/// - `rate_limit` is attached only when all three headers parse
/// - `detail` is the body's `detail` field when the body is an object that
///   has one, otherwise the transport error's own message
#[must_use]
pub fn normalize(error: TransportError) -> IpDriftError {
    let response = error.response();

    let status = response.map_or(NO_RESPONSE_STATUS, |r| r.status);
    let rate_limit = response.and_then(|r| RateLimitInfo::from_headers(&r.headers));
    let detail = response
        .and_then(|r| body_detail(&r.body))
        .unwrap_or_else(|| error.to_string());
    let message = status_message(status);

    tracing::warn!(status, %message, %detail, "IPDrift request failed");

    IpDriftError::new(message)
        .with_status(status)
        .with_detail(detail)
        .with_rate_limit(rate_limit)
}

/// Extracts the `detail` field of a JSON object body.
fn body_detail(body: &Value) -> Option<String> {
    match body.as_object()?.get("detail")? {
        Value::Null => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}
