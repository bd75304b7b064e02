//! HTTP transport for IPDrift API communication.
//!
//! This module provides the [`HttpClient`] type, the `reqwest`-backed
//! [`Transport`] used by [`IpDriftClient::new`](crate::IpDriftClient::new).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::{HttpResponseError, TransportError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{BaseUrl, IpDriftConfig};
use crate::error::ConfigError;

/// HTTP client bound to a base URL, a timeout and a fixed set of headers.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`User-Agent`, `Accept`, `Content-Type`)
/// - The configured timeout, applied uniformly to every request
/// - Classification of outcomes into responses and [`TransportError`]s
///
/// No retries are performed.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use ipdrift::IpDriftConfig;
/// use ipdrift::clients::HttpClient;
///
/// let config = IpDriftConfig::new("your-api-key").unwrap();
/// let client = HttpClient::new(&config).unwrap();
///
/// assert_eq!(client.base_url().as_ref(), "https://geo.ipdrift.com");
/// assert_eq!(
///     client.default_headers().get("Accept"),
///     Some(&"application/json".to_string())
/// );
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://geo.ipdrift.com`).
    base_url: BaseUrl,
    /// Timeout applied to every request.
    timeout: Duration,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// The API key is not stored here; the caller adds it to each request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &IpDriftConfig) -> Result<Self, ConfigError> {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), config.user_agent().to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            timeout: config.timeout(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the timeout applied to every request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The timeout elapses (`Timeout`)
    /// - Any other network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        let res = req_builder.send().await.map_err(|e| self.classify(e))?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.map_err(|e| self.classify(e))?;
        let body = HttpResponse::parse_body(&body_text);

        let response = HttpResponse::new(code, headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        Err(TransportError::Response(HttpResponseError {
            status: response.code,
            headers: response.headers,
            body: response.body,
        }))
    }

    /// Maps a reqwest error onto the transport error taxonomy.
    fn classify(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::timeout(self.timeout)
        } else {
            TransportError::network(error)
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.send(request).await
    }
}
