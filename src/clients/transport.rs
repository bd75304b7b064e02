use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends requests on behalf of an [`IpDriftClient`](crate::IpDriftClient).
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Implementations must return `Ok` only for 2xx responses
/// and report every other outcome as a [`TransportError`]; the client
/// normalizes those errors itself.
///
/// The request passed in already carries the `api_key` query parameter.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use ipdrift::clients::{HttpRequest, HttpResponse, Transport, TransportError};
/// use serde_json::json;
///
/// struct AlwaysHealthy;
///
/// #[async_trait]
/// impl Transport for AlwaysHealthy {
///     async fn get(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(200, Default::default(), json!({"ok": true})))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET request.
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
