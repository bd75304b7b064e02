//! Transport layer for IPDrift API communication.
//!
//! This module provides the HTTP plumbing underneath
//! [`IpDriftClient`](crate::IpDriftClient): request and response types, the
//! [`Transport`] seam, its `reqwest`-backed implementation, and the
//! normalization of transport failures into
//! [`IpDriftError`](crate::IpDriftError).
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP transport
//! - [`HttpRequest`]: a GET request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`RateLimitInfo`]: the `X-RateLimit-*` snapshot
//! - [`TransportError`]: what can go wrong on the wire
//! - [`normalize`]: turns a [`TransportError`] into an `IpDriftError`
//!
//! # Retry Behavior
//!
//! None. Each call issues exactly one request. The configured `retries`
//! value is reported by the client but not acted on.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod normalize;
mod transport;

pub use errors::{HttpResponseError, InvalidHttpRequestError, TransportError};
pub use http_client::HttpClient;
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitInfo};
pub use normalize::{normalize, status_message, NO_RESPONSE_STATUS};
pub use transport::Transport;
